//! Quadrant classification for the built-in shape kinds.
//!
//! Each function maps a shape and a node's bounds to the set of child
//! quadrants the shape overlaps. They are pure and exposed so that custom
//! shapes can reuse them from their own [`Indexable`](crate::Indexable) impl.

use crate::intersect;
use crate::{NodeGeometry, Point, Quadrant, Quadrants};

/// Classify an axis-aligned rectangle.
///
/// Comparisons against the node's center are strict: an edge lying exactly on
/// the centerline does not reach into the quadrant on the other side, so a
/// zero-size rectangle sitting on the center overlaps nothing.
pub fn rectangle(rect: &NodeGeometry, node: &NodeGeometry) -> Quadrants {
    let center = node.center();

    let start_is_north = rect.y < center.y;
    let start_is_west = rect.x < center.x;
    let end_is_east = rect.x + rect.width > center.x;
    let end_is_south = rect.y + rect.height > center.y;

    let mut quadrants = Quadrants::NONE;
    if start_is_north && end_is_east {
        quadrants.insert(Quadrant::TopRight);
    }
    if start_is_west && start_is_north {
        quadrants.insert(Quadrant::TopLeft);
    }
    if start_is_west && end_is_south {
        quadrants.insert(Quadrant::BottomLeft);
    }
    if end_is_east && end_is_south {
        quadrants.insert(Quadrant::BottomRight);
    }
    quadrants
}

/// Classify a circle by testing it against each quadrant's rectangle.
pub fn circle(center: Point, r: f64, node: &NodeGeometry) -> Quadrants {
    Quadrant::ALL
        .into_iter()
        .filter(|q| {
            let sub = node.quadrant(*q);
            intersect::circle_rect(center, r, sub.origin(), sub.end())
        })
        .collect()
}

/// Classify a line segment by testing it against each quadrant's rectangle.
pub fn line(start: Point, end: Point, node: &NodeGeometry) -> Quadrants {
    Quadrant::ALL
        .into_iter()
        .filter(|q| {
            let sub = node.quadrant(*q);
            intersect::line_rect(start, end, sub.origin(), sub.end())
        })
        .collect()
}
