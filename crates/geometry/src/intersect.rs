//! Shape-versus-rectangle intersection predicates.
//!
//! Rectangles are given as `min`/`max` corners. All comparisons follow plain
//! IEEE-754 semantics; NaN inputs never intersect anything.

use crate::Point;

/// Circle against axis-aligned rectangle, using the closest point on the rectangle.
///
/// Touching (distance exactly `r`) does not count as intersecting.
#[inline]
pub fn circle_rect(center: Point, r: f64, min: Point, max: Point) -> bool {
    let closest = center.min(max).max(min);
    let delta = center - closest;
    // f64::min/max skip NaN operands, so NaN bounds would otherwise clamp to the center.
    delta.length_squared() < r * r && !min.is_nan() && !max.is_nan()
}

/// Line segment against axis-aligned rectangle.
///
/// Endpoints on the rectangle's border count as inside, but a segment lying
/// entirely on or beyond one edge is rejected, and crossings are only detected
/// strictly between the corners. A 45° segment that enters or leaves exactly
/// through a corner is therefore missed; see
/// <https://stackoverflow.com/a/18292964/860205>.
pub fn line_rect(start: Point, end: Point, min: Point, max: Point) -> bool {
    let (x1, y1, x2, y2) = (start.x, start.y, end.x, end.y);

    // Completely outside one edge
    if (x1 <= min.x && x2 <= min.x)
        || (y1 <= min.y && y2 <= min.y)
        || (x1 >= max.x && x2 >= max.x)
        || (y1 >= max.y && y2 >= max.y)
    {
        return false;
    }

    // Either endpoint inside
    let inside = |x: f64, y: f64| x >= min.x && x <= max.x && y >= min.y && y <= max.y;
    if inside(x1, y1) || inside(x2, y2) {
        return true;
    }

    let m = (y2 - y1) / (x2 - x1);

    let y = m * (min.x - x1) + y1;
    if y > min.y && y < max.y {
        return true;
    }

    let y = m * (max.x - x1) + y1;
    if y > min.y && y < max.y {
        return true;
    }

    let x = (min.y - y1) / m + x1;
    if x > min.x && x < max.x {
        return true;
    }

    let x = (max.y - y1) / m + x1;
    x > min.x && x < max.x
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Point = Point::new(0.0, 0.0);
    const MAX: Point = Point::new(10.0, 10.0);

    #[test]
    fn test_circle_inside_and_outside() {
        assert!(circle_rect(Point::new(5.0, 5.0), 1.0, MIN, MAX));
        assert!(circle_rect(Point::new(-0.5, 5.0), 1.0, MIN, MAX));
        assert!(!circle_rect(Point::new(-2.0, 5.0), 1.0, MIN, MAX));
    }

    #[test]
    fn test_circle_touching_is_outside() {
        assert!(!circle_rect(Point::new(-1.0, 5.0), 1.0, MIN, MAX));
        // Corner at distance 5
        assert!(!circle_rect(Point::new(-3.0, -4.0), 5.0, MIN, MAX));
        assert!(circle_rect(Point::new(-3.0, -4.0), 5.5, MIN, MAX));
    }

    #[test]
    fn test_circle_nan_never_intersects() {
        assert!(!circle_rect(Point::new(5.0, 5.0), f64::NAN, MIN, MAX));
        assert!(!circle_rect(Point::new(f64::NAN, 5.0), 1.0, MIN, MAX));
        assert!(!circle_rect(Point::new(5.0, 5.0), 1.0, Point::new(f64::NAN, 0.0), MAX));
    }

    #[test]
    fn test_line_trivial_rejection() {
        assert!(!line_rect(Point::new(-5.0, 0.0), Point::new(-1.0, 20.0), MIN, MAX));
        // Lying on the left edge counts as outside
        assert!(!line_rect(Point::new(0.0, 2.0), Point::new(0.0, 8.0), MIN, MAX));
        assert!(!line_rect(Point::new(2.0, 10.0), Point::new(8.0, 12.0), MIN, MAX));
    }

    #[test]
    fn test_line_endpoint_inside() {
        assert!(line_rect(Point::new(5.0, 5.0), Point::new(50.0, 50.0), MIN, MAX));
        assert!(line_rect(Point::new(-5.0, -5.0), Point::new(10.0, 3.0), MIN, MAX));
    }

    #[test]
    fn test_line_passes_through() {
        assert!(line_rect(Point::new(-5.0, 5.0), Point::new(15.0, 5.0), MIN, MAX));
        assert!(line_rect(Point::new(5.0, -5.0), Point::new(6.0, 15.0), MIN, MAX));
        assert!(line_rect(Point::new(-5.0, 2.0), Point::new(15.0, 12.0), MIN, MAX));
    }

    #[test]
    fn test_line_vertical_crossing() {
        // Infinite slope still finds the horizontal edge crossings.
        assert!(line_rect(Point::new(5.0, -5.0), Point::new(5.0, 15.0), MIN, MAX));
    }

    #[test]
    fn test_line_misses_diagonally() {
        assert!(!line_rect(Point::new(-5.0, 3.0), Point::new(3.0, -5.0), MIN, MAX));
    }

    #[test]
    fn test_line_exact_corner_diagonal_is_missed() {
        // Runs corner to corner through the interior, but is not detected.
        assert!(!line_rect(Point::new(15.0, -5.0), Point::new(-5.0, 15.0), MIN, MAX));
    }
}
