//! Region quadtree for broad-phase collision queries.
//!
//! Shapes are shared with the tree as `Rc` handles. A shape straddling a
//! quadrant boundary is stored in every leaf it overlaps and reported once by
//! [`Quadtree::retrieve`].
//!
//! ```
//! use std::rc::Rc;
//! use quadtree::{Circle, Quadtree, QuadtreeProps, Rectangle, Shape};
//!
//! let mut tree = Quadtree::new(QuadtreeProps::new(640.0, 480.0).with_max_objects(4));
//! tree.insert(Rc::new(Shape::from(Rectangle::new(10.0, 10.0, 32.0, 32.0))));
//! tree.insert(Rc::new(Shape::from(Circle::new(320.0, 240.0, 16.0))));
//!
//! let candidates = tree.retrieve(&Rectangle::new(0.0, 0.0, 64.0, 64.0));
//! assert_eq!(candidates.len(), 2);
//! ```

mod config;
mod error;
mod traverse;
mod tree;

pub use config::QuadtreeProps;
pub use error::{ConfigError, QuadtreeError};
pub use traverse::{Iter, TreeStats};
pub use tree::Quadtree;

// Re-export the shape layer so callers only need this crate.
pub use geometry::{
    classify, intersect, Circle, Classifier, GeometryError, Indexable, Line, NodeGeometry, Point,
    Quadrant, QuadrantIter, Quadrants, Rectangle, Registered, Shape, ShapeRegistry, Tagged,
};
