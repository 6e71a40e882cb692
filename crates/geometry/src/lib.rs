//! Shape primitives for the region quadtree.
//!
//! This crate contains:
//! - Node bounds (`NodeGeometry`) and quadrant sets
//! - The `Indexable` classification protocol
//! - Built-in rectangles, circles and line segments
//! - A tagged dispatch table for shapes classified by kind name

pub mod classify;
mod error;
mod indexable;
pub mod intersect;
mod quadrant;
mod registry;
mod shapes;

pub use error::GeometryError;
pub use indexable::Indexable;
pub use quadrant::{Quadrant, QuadrantIter, Quadrants};
pub use registry::{Classifier, Registered, ShapeRegistry, Tagged};
pub use shapes::{Circle, Line, Rectangle, Shape};

/// A 2D point or extent using glam's double-precision vector.
pub type Point = glam::DVec2;

/// The axis-aligned rectangle a quadtree node is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeGeometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Center point, where the four quadrants meet.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Bounds of one quadrant: exactly half the width and height, no rounding.
    pub fn quadrant(&self, quadrant: Quadrant) -> NodeGeometry {
        let w2 = self.width / 2.0;
        let h2 = self.height / 2.0;
        let (x, y) = match quadrant {
            Quadrant::TopRight => (self.x + w2, self.y),
            Quadrant::TopLeft => (self.x, self.y),
            Quadrant::BottomLeft => (self.x, self.y + h2),
            Quadrant::BottomRight => (self.x + w2, self.y + h2),
        };
        NodeGeometry::new(x, y, w2, h2)
    }

    /// Bounds of all four quadrants in index order.
    pub fn quadrants(&self) -> [NodeGeometry; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

/// Bare geometry classifies like a rectangle, so plain bounds work as query probes.
impl Indexable for NodeGeometry {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        classify::rectangle(self, node)
    }
}
