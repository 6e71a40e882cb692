//! Built-in shape kinds.
//!
//! Every shape carries an opaque `data` payload that the tree never looks at.
//! Use a `Cell`/`RefCell` payload when callers need to flag shapes while they
//! are shared with a tree.

use crate::{classify, Indexable, NodeGeometry, Point, Quadrants};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle<D = ()> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data: D,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, data: () }
    }
}

impl<D> Rectangle<D> {
    pub fn with_data(x: f64, y: f64, width: f64, height: f64, data: D) -> Self {
        Self { x, y, width, height, data }
    }

    /// The rectangle's extent as plain geometry.
    #[inline]
    pub fn geometry(&self) -> NodeGeometry {
        NodeGeometry::new(self.x, self.y, self.width, self.height)
    }
}

impl<D> Indexable for Rectangle<D> {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        classify::rectangle(&self.geometry(), node)
    }
}

/// Circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle<D = ()> {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub data: D,
}

impl Circle {
    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r, data: () }
    }
}

impl<D> Circle<D> {
    pub fn with_data(x: f64, y: f64, r: f64, data: D) -> Self {
        Self { x, y, r, data }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<D> Indexable for Circle<D> {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        classify::circle(self.center(), self.r, node)
    }
}

/// Line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line<D = ()> {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub data: D,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2, data: () }
    }
}

impl<D> Line<D> {
    pub fn with_data(x1: f64, y1: f64, x2: f64, y2: f64, data: D) -> Self {
        Self { x1, y1, x2, y2, data }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

impl<D> Indexable for Line<D> {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        classify::line(self.start(), self.end(), node)
    }
}

/// Any of the built-in shapes, for trees that mix kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<D = ()> {
    Rectangle(Rectangle<D>),
    Circle(Circle<D>),
    Line(Line<D>),
}

impl<D> Shape<D> {
    pub fn data(&self) -> &D {
        match self {
            Shape::Rectangle(s) => &s.data,
            Shape::Circle(s) => &s.data,
            Shape::Line(s) => &s.data,
        }
    }

    pub fn data_mut(&mut self) -> &mut D {
        match self {
            Shape::Rectangle(s) => &mut s.data,
            Shape::Circle(s) => &mut s.data,
            Shape::Line(s) => &mut s.data,
        }
    }

    /// Kind name, as used by [`ShapeRegistry`](crate::ShapeRegistry) tables.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
        }
    }
}

impl<D> Indexable for Shape<D> {
    fn qt_index(&self, node: &NodeGeometry) -> Quadrants {
        match self {
            Shape::Rectangle(s) => s.qt_index(node),
            Shape::Circle(s) => s.qt_index(node),
            Shape::Line(s) => s.qt_index(node),
        }
    }
}

impl<D> From<Rectangle<D>> for Shape<D> {
    fn from(s: Rectangle<D>) -> Self {
        Shape::Rectangle(s)
    }
}

impl<D> From<Circle<D>> for Shape<D> {
    fn from(s: Circle<D>) -> Self {
        Shape::Circle(s)
    }
}

impl<D> From<Line<D>> for Shape<D> {
    fn from(s: Line<D>) -> Self {
        Shape::Line(s)
    }
}
