//! Read-only traversal, for drawing node outlines or inspecting tree shape.

use crate::Quadtree;

/// Depth-first, pre-order iterator over a node and all of its descendants.
/// Children are visited in quadrant order.
#[derive(Debug)]
pub struct Iter<'a, T: ?Sized> {
    stack: Vec<&'a Quadtree<T>>,
}

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a Quadtree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(nodes) = node.nodes() {
            self.stack.extend(nodes.iter().rev());
        }
        Some(node)
    }
}

/// Summary of a tree's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub node_count: usize,
    pub leaf_count: usize,
    /// Deepest level present, absolute (the root is level 0).
    pub depth: u32,
    /// Stored handles summed over all leaves. A straddling shape counts once
    /// per leaf holding it.
    pub stored_refs: usize,
}

impl<T: ?Sized> Quadtree<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { stack: vec![self] }
    }

    pub fn stats(&self) -> TreeStats {
        self.iter().fold(TreeStats::default(), |mut stats, node| {
            stats.node_count += 1;
            if node.is_leaf() {
                stats.leaf_count += 1;
            }
            stats.depth = stats.depth.max(node.level());
            stats.stored_refs += node.objects().len();
            stats
        })
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a Quadtree<T> {
    type Item = &'a Quadtree<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuadtreeProps;
    use geometry::Rectangle;
    use std::rc::Rc;

    #[test]
    fn test_single_leaf() {
        let tree: Quadtree<Rectangle> = Quadtree::new(QuadtreeProps::new(10.0, 10.0));
        assert_eq!(tree.iter().count(), 1);
        assert_eq!(
            tree.stats(),
            TreeStats {
                node_count: 1,
                leaf_count: 1,
                depth: 0,
                stored_refs: 0
            }
        );
    }

    #[test]
    fn test_pre_order() {
        let mut tree: Quadtree<Rectangle> = Quadtree::new(QuadtreeProps::new(100.0, 100.0));
        tree.split().unwrap();

        let order: Vec<_> = tree.iter().map(|n| (n.bounds().x, n.bounds().y)).collect();
        assert_eq!(
            order,
            [(0.0, 0.0), (50.0, 0.0), (0.0, 0.0), (0.0, 50.0), (50.0, 50.0)]
        );
    }

    #[test]
    fn test_stats_count_straddlers_per_leaf() {
        let props = QuadtreeProps::new(100.0, 100.0).with_max_objects(2);
        let mut tree: Quadtree<Rectangle> = Quadtree::new(props);
        tree.insert(Rc::new(Rectangle::new(10.0, 10.0, 5.0, 5.0)));
        tree.insert(Rc::new(Rectangle::new(40.0, 40.0, 20.0, 20.0)));
        tree.insert(Rc::new(Rectangle::new(80.0, 80.0, 5.0, 5.0)));

        let stats = tree.stats();
        assert_eq!(stats.node_count, 5);
        assert_eq!(stats.leaf_count, 4);
        assert_eq!(stats.depth, 1);
        // The centered square sits in all four leaves.
        assert_eq!(stats.stored_refs, 6);
        assert_eq!((&tree).into_iter().count(), 5);
    }
}
