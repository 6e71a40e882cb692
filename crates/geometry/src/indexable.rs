//! The classification protocol every stored or probing shape implements.

use crate::{NodeGeometry, Quadrants};
use std::rc::Rc;

/// A value that can report which quadrants of a node it overlaps.
///
/// This is the only thing the tree knows about its objects. The built-in
/// [`Rectangle`](crate::Rectangle), [`Circle`](crate::Circle) and
/// [`Line`](crate::Line) are three implementations; any user type can join by
/// implementing it, typically by delegating to a function in [`crate::classify`].
pub trait Indexable {
    /// Quadrants of `node` this value intersects (0-3 = top-right, top-left,
    /// bottom-left, bottom-right).
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants;
}

impl<T: Indexable + ?Sized> Indexable for &T {
    #[inline]
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        (**self).qt_index(node)
    }
}

impl<T: Indexable + ?Sized> Indexable for Box<T> {
    #[inline]
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        (**self).qt_index(node)
    }
}

impl<T: Indexable + ?Sized> Indexable for Rc<T> {
    #[inline]
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        (**self).qt_index(node)
    }
}
