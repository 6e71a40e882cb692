//! Quadrant indices and sets of quadrants.

use std::fmt;

/// One of the four equal sub-rectangles of a node.
///
/// The discriminant is the child index: 0 = top-right, 1 = top-left,
/// 2 = bottom-left, 3 = bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Quadrant> {
        match index {
            0 => Some(Quadrant::TopRight),
            1 => Some(Quadrant::TopLeft),
            2 => Some(Quadrant::BottomLeft),
            3 => Some(Quadrant::BottomRight),
            _ => None,
        }
    }
}

/// Set of quadrants a shape overlaps, iterated in ascending index order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quadrants(u8);

impl Quadrants {
    pub const NONE: Quadrants = Quadrants(0);
    pub const ALL: Quadrants = Quadrants(0b1111);

    #[inline]
    pub fn insert(&mut self, quadrant: Quadrant) {
        self.0 |= 1 << quadrant.index();
    }

    /// Builder form of [`Quadrants::insert`].
    #[inline]
    pub fn with(mut self, quadrant: Quadrant) -> Self {
        self.insert(quadrant);
        self
    }

    #[inline]
    pub fn contains(&self, quadrant: Quadrant) -> bool {
        self.0 & (1 << quadrant.index()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(&self) -> QuadrantIter {
        QuadrantIter { bits: self.0 }
    }

    /// Child indices in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().map(Quadrant::index).collect()
    }
}

impl FromIterator<Quadrant> for Quadrants {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        iter.into_iter().fold(Quadrants::NONE, Quadrants::with)
    }
}

impl IntoIterator for Quadrants {
    type Item = Quadrant;
    type IntoIter = QuadrantIter;

    fn into_iter(self) -> QuadrantIter {
        self.iter()
    }
}

/// Iterator over the members of a [`Quadrants`] set, lowest index first.
#[derive(Debug, Clone)]
pub struct QuadrantIter {
    bits: u8,
}

impl Iterator for QuadrantIter {
    type Item = Quadrant;

    fn next(&mut self) -> Option<Quadrant> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Drop the lowest set bit.
        self.bits &= self.bits - 1;
        Quadrant::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl fmt::Debug for Quadrants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
            assert_eq!(Quadrant::from_index(i), Some(*q));
        }
        assert_eq!(Quadrant::from_index(4), None);
    }

    #[test]
    fn test_set_iterates_ascending() {
        let set: Quadrants = [Quadrant::BottomRight, Quadrant::TopLeft, Quadrant::TopLeft]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), [1, 3]);
        assert!(set.contains(Quadrant::TopLeft));
        assert!(!set.contains(Quadrant::TopRight));
    }

    #[test]
    fn test_empty_and_full() {
        assert!(Quadrants::NONE.is_empty());
        assert_eq!(Quadrants::ALL.to_vec(), [0, 1, 2, 3]);
        assert_eq!(format!("{:?}", Quadrants::ALL), "[0, 1, 2, 3]");
    }
}
