//! Drawing-area bounds
//!
//! A canvas reserves a one-cell frame around its drawing area. The
//! boundary records the inclusive extent of that inner area and answers
//! the geometric questions the validator and the rasterizer ask of it.

use serde::{Deserialize, Serialize};

use super::geometry::{Axis, Point, Size};

/// Inclusive bounds of the drawing area
///
/// For a canvas of height 0 `bottom` is smaller than `top`, so no point is
/// ever inside the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Boundary {
    /// Compute the drawing area of a canvas with the given size
    ///
    /// The grid has `height + 2` rows, so the last drawable row is `height`.
    pub fn from_size(size: Size) -> Self {
        Self {
            left: 1,
            top: 1,
            right: size.width.saturating_sub(2),
            bottom: size.height,
        }
    }

    pub fn contains_x(&self, x: i32) -> bool {
        self.left <= x && x <= self.right
    }

    pub fn contains_y(&self, y: i32) -> bool {
        self.top <= y && y <= self.bottom
    }

    /// Check whether a point lies inside the drawing area
    pub fn contains(&self, p: Point) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    /// Check whether a horizontal or vertical segment overlaps the drawing area
    ///
    /// Only the fixed coordinate must be in range; the endpoints may lie
    /// outside as long as they are not both on the same side of the area.
    /// Any other slope never intersects.
    pub fn intersects_segment(&self, a: Point, b: Point) -> bool {
        if is_horizontal(a, b) {
            let both_left = a.x < self.left && b.x < self.left;
            let both_right = a.x > self.right && b.x > self.right;
            self.contains_y(a.y) && !(both_left || both_right)
        } else if is_vertical(a, b) {
            let both_above = a.y < self.top && b.y < self.top;
            let both_below = a.y > self.bottom && b.y > self.bottom;
            self.contains_x(a.x) && !(both_above || both_below)
        } else {
            false
        }
    }

    /// Clamp a coordinate into the drawing area along `axis`
    ///
    /// Applies the lower bound first, then the upper one, so a degenerate
    /// area (`top > bottom`) yields the upper bound instead of panicking.
    pub fn clamp(&self, pos: i32, axis: Axis) -> i32 {
        let (low, high) = match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        };
        pos.max(low).min(high)
    }
}

/// Both endpoints share a row
pub fn is_horizontal(a: Point, b: Point) -> bool {
    a.y == b.y
}

/// Both endpoints share a column
pub fn is_vertical(a: Point, b: Point) -> bool {
    a.x == b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary() -> Boundary {
        // 20 columns wide, 4 drawable rows: area is [1, 18] x [1, 4]
        Boundary::from_size(Size::new(20, 4))
    }

    #[test]
    fn test_from_size() {
        let b = boundary();
        assert_eq!((b.left, b.top, b.right, b.bottom), (1, 1, 18, 4));

        let narrow = Boundary::from_size(Size::new(3, 0));
        assert_eq!((narrow.left, narrow.right), (1, 1));
        assert_eq!((narrow.top, narrow.bottom), (1, 0));
    }

    #[test]
    fn test_contains() {
        let b = boundary();
        assert!(b.contains(Point::new(1, 1)));
        assert!(b.contains(Point::new(18, 4)));
        assert!(!b.contains(Point::new(0, 1)));
        assert!(!b.contains(Point::new(19, 1)));
        assert!(!b.contains(Point::new(5, 0)));
        assert!(!b.contains(Point::new(5, 5)));
    }

    #[test]
    fn test_zero_height_contains_nothing() {
        let b = Boundary::from_size(Size::new(10, 0));
        for x in 0..10 {
            for y in 0..2 {
                assert!(!b.contains(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn test_orientation() {
        assert!(is_horizontal(Point::new(1, 2), Point::new(9, 2)));
        assert!(!is_horizontal(Point::new(1, 2), Point::new(1, 3)));
        assert!(is_vertical(Point::new(4, 1), Point::new(4, 8)));
        // A single point is both
        assert!(is_horizontal(Point::new(4, 4), Point::new(4, 4)));
        assert!(is_vertical(Point::new(4, 4), Point::new(4, 4)));
    }

    #[test]
    fn test_horizontal_intersection() {
        let b = boundary();
        assert!(b.intersects_segment(Point::new(2, 2), Point::new(6, 2)));
        // Straddles the left edge
        assert!(b.intersects_segment(Point::new(0, 2), Point::new(3, 2)));
        // Spans the whole area with both ends outside
        assert!(b.intersects_segment(Point::new(0, 2), Point::new(40, 2)));
        // Entirely to the right
        assert!(!b.intersects_segment(Point::new(19, 2), Point::new(30, 2)));
        // Entirely to the left
        assert!(!b.intersects_segment(Point::new(0, 2), Point::new(0, 2)));
        // On the border row
        assert!(!b.intersects_segment(Point::new(2, 0), Point::new(6, 0)));
        assert!(!b.intersects_segment(Point::new(2, 5), Point::new(6, 5)));
    }

    #[test]
    fn test_vertical_intersection() {
        let b = boundary();
        assert!(b.intersects_segment(Point::new(3, 1), Point::new(3, 4)));
        assert!(b.intersects_segment(Point::new(3, 0), Point::new(3, 9)));
        assert!(!b.intersects_segment(Point::new(3, 5), Point::new(3, 9)));
        assert!(!b.intersects_segment(Point::new(0, 1), Point::new(0, 4)));
        assert!(!b.intersects_segment(Point::new(19, 1), Point::new(19, 4)));
    }

    #[test]
    fn test_sloped_never_intersects() {
        let b = boundary();
        assert!(!b.intersects_segment(Point::new(1, 1), Point::new(4, 4)));
    }

    #[test]
    fn test_clamp() {
        let b = boundary();
        assert_eq!(b.clamp(0, Axis::Horizontal), 1);
        assert_eq!(b.clamp(7, Axis::Horizontal), 7);
        assert_eq!(b.clamp(50, Axis::Horizontal), 18);
        assert_eq!(b.clamp(0, Axis::Vertical), 1);
        assert_eq!(b.clamp(50, Axis::Vertical), 4);
    }

    #[test]
    fn test_clamp_degenerate_area() {
        let b = Boundary::from_size(Size::new(5, 0));
        assert_eq!(b.clamp(0, Axis::Vertical), 0);
        assert_eq!(b.clamp(3, Axis::Vertical), 0);
    }
}
