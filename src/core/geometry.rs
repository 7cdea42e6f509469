//! Geometry primitives
//!
//! Integer points and sizes used to address the canvas. Coordinates are
//! zero-based, with x growing to the right and y growing downward.

use serde::{Deserialize, Serialize};

/// A position on the canvas grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Requested canvas dimensions
///
/// `width` counts every column including the two border columns, while
/// `height` counts only the drawable rows. A canvas of `Size::new(w, h)`
/// therefore occupies `h + 2` rows of `w` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The four border segments of the rectangle spanned by two opposite corners
///
/// Order: the edge through `a` along x = a.x, the edge through the corner
/// `(a.x, b.y)` to `b`, the edge from `b` along x = b.x, and the edge from the
/// corner `(b.x, a.y)` back to `a`.
pub fn rectangle_edges(a: Point, b: Point) -> [(Point, Point); 4] {
    let ab = Point::new(a.x, b.y);
    let ba = Point::new(b.x, a.y);
    [(a, ab), (ab, b), (b, ba), (ba, a)]
}

/// Grid axis, used to pick which pair of bounds a coordinate is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns (x)
    Horizontal,
    /// Rows (y)
    Vertical,
}
