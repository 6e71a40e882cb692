//! Quadtree node.
//!
//! Every node is either a leaf holding shape handles or an internal node with
//! exactly four children and no shapes of its own. Children are created only
//! by splitting and dropped only by [`Quadtree::clear`].

use crate::{QuadtreeError, QuadtreeProps};
use geometry::{Indexable, NodeGeometry, Quadrants};
use std::collections::HashSet;
use std::mem;
use std::rc::Rc;
use tracing::{debug, trace};

/// A quadtree node; the root is the tree.
///
/// Shapes are held as `Rc<T>` so a shape overlapping several quadrants can be
/// listed under several leaves. `T` may be unsized, e.g. `dyn Indexable` for
/// trees mixing user-defined shape types.
#[derive(Debug)]
pub struct Quadtree<T: ?Sized> {
    bounds: NodeGeometry,
    max_objects: u32,
    max_levels: u32,
    level: u32,
    objects: Vec<Rc<T>>,
    nodes: Option<Box<[Quadtree<T>; 4]>>,
}

impl<T: ?Sized> Quadtree<T> {
    /// Create an empty root node.
    pub fn new(props: QuadtreeProps) -> Self {
        Self::with_level(props.bounds(), props.max_objects, props.max_levels, 0)
    }

    fn with_level(bounds: NodeGeometry, max_objects: u32, max_levels: u32, level: u32) -> Self {
        Self {
            bounds,
            max_objects,
            max_levels,
            level,
            objects: Vec::new(),
            nodes: None,
        }
    }

    #[inline]
    pub fn bounds(&self) -> &NodeGeometry {
        &self.bounds
    }

    #[inline]
    pub fn max_objects(&self) -> u32 {
        self.max_objects
    }

    #[inline]
    pub fn max_levels(&self) -> u32 {
        self.max_levels
    }

    /// Depth of this node; 0 for the root.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Shapes stored directly at this node. Always empty for internal nodes.
    #[inline]
    pub fn objects(&self) -> &[Rc<T>] {
        &self.objects
    }

    /// Children in quadrant order, if this node has been split.
    #[inline]
    pub fn nodes(&self) -> Option<&[Quadtree<T>; 4]> {
        self.nodes.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.nodes.is_none()
    }

    /// Quadrants of this node that `shape` overlaps.
    #[inline]
    pub fn get_index<Q: Indexable + ?Sized>(&self, shape: &Q) -> Quadrants {
        shape.qt_index(&self.bounds)
    }

    /// Drop all shapes and children. The node keeps its bounds and level.
    pub fn clear(&mut self) {
        self.objects.clear();
        if self.nodes.take().is_some() {
            trace!(level = self.level, "Cleared subtree");
        }
    }

    /// Clear the tree and move it to new bounds, e.g. after a viewport resize.
    pub fn resize(&mut self, bounds: NodeGeometry) {
        self.clear();
        self.bounds = bounds;
    }

    fn subdivide(&self) -> Box<[Quadtree<T>; 4]> {
        trace!(
            level = self.level,
            x = self.bounds.x,
            y = self.bounds.y,
            width = self.bounds.width,
            height = self.bounds.height,
            "Splitting node"
        );
        let level = self.level + 1;
        let (max_objects, max_levels) = (self.max_objects, self.max_levels);
        Box::new(
            self.bounds
                .quadrants()
                .map(|bounds| Quadtree::with_level(bounds, max_objects, max_levels, level)),
        )
    }
}

impl<T: Indexable + ?Sized> Quadtree<T> {
    /// Split this node into four children and move its shapes into them.
    ///
    /// [`insert`](Self::insert) splits on its own; calling this directly is
    /// only useful to pre-build structure. Fails without touching the subtree
    /// if the node is already split or sits at `max_levels`.
    pub fn split(&mut self) -> Result<(), QuadtreeError> {
        if self.nodes.is_some() {
            return Err(QuadtreeError::AlreadySplit { level: self.level });
        }
        if self.level >= self.max_levels {
            return Err(QuadtreeError::MaxDepth { level: self.level });
        }
        self.split_and_redistribute();
        Ok(())
    }

    fn split_and_redistribute(&mut self) {
        self.nodes = Some(self.subdivide());
        for object in mem::take(&mut self.objects) {
            self.push_down(object);
        }
    }

    /// Insert `shape` into each child it overlaps. Only called on split nodes.
    fn push_down(&mut self, shape: Rc<T>) {
        let Some(nodes) = self.nodes.as_deref_mut() else {
            return;
        };
        let quadrants = shape.qt_index(&self.bounds);
        if quadrants.is_empty() {
            debug!(level = self.level, "Shape overlaps no quadrant, not stored");
        }
        for quadrant in quadrants {
            nodes[quadrant.index()].insert(Rc::clone(&shape));
        }
    }

    /// Insert a shape.
    ///
    /// A leaf that goes over `max_objects` splits (unless it is already at
    /// `max_levels`) and hands all of its shapes down to the children they
    /// overlap.
    pub fn insert(&mut self, shape: Rc<T>) {
        if self.nodes.is_some() {
            self.push_down(shape);
            return;
        }

        self.objects.push(shape);

        if self.objects.len() > self.max_objects as usize {
            if self.level < self.max_levels {
                self.split_and_redistribute();
            } else if self.objects.len() == self.max_objects as usize + 1 {
                debug!(
                    level = self.level,
                    max_objects = self.max_objects,
                    "Leaf at max depth is over capacity"
                );
            }
        }
    }

    /// All shapes that could collide with `probe`: everything stored in the
    /// leaves whose quadrants `probe` overlaps.
    ///
    /// Each shape appears once, in order of first discovery, compared by
    /// `Rc` identity.
    pub fn retrieve<Q: Indexable + ?Sized>(&self, probe: &Q) -> Vec<Rc<T>> {
        let mut found = Vec::new();
        self.collect(probe, &mut found);

        let mut seen = HashSet::with_capacity(found.len());
        found.retain(|shape| seen.insert(Rc::as_ptr(shape) as *const ()));
        found
    }

    fn collect<Q: Indexable + ?Sized>(&self, probe: &Q, found: &mut Vec<Rc<T>>) {
        found.extend(self.objects.iter().cloned());

        if let Some(nodes) = self.nodes.as_deref() {
            for quadrant in self.get_index(probe) {
                nodes[quadrant.index()].collect(probe, found);
            }
        }
    }
}
