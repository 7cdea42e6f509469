//! Canvas model
//!
//! The canvas is a bordered character grid. Row 0 and the last row hold
//! the horizontal border, column 0 and the last column of every drawable
//! row hold the vertical border, and everything in between is the drawing
//! area described by [`Boundary`].
//!
//! Drawing operations clip to the drawing area and never fail. Callers are
//! expected to validate commands first (see `validate`); the
//! rasterizer only guards against indexing outside the grid.

use tracing::debug;

use super::boundary::{is_horizontal, is_vertical, Boundary};
use super::error::CanvasError;
use super::fill::flood_fill;
use super::geometry::{rectangle_edges, Axis, Point, Size};
use super::grid::{Grid, Row};
use super::palette::Palette;

/// A bordered drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    grid: Grid,
    size: Size,
    boundary: Boundary,
}

impl Canvas {
    /// Create a canvas with the default palette
    pub fn new(size: Size) -> Result<Self, CanvasError> {
        Self::with_palette(size, Palette::default())
    }

    /// Create a canvas of `size.height + 2` rows by `size.width` columns
    ///
    /// Fails with [`CanvasError::CanvasTooLarge`] if the grid cannot be
    /// allocated.
    pub fn with_palette(size: Size, palette: Palette) -> Result<Self, CanvasError> {
        let cols = to_index(size.width).unwrap_or(0);
        let rows = to_index(size.height.saturating_add(2)).unwrap_or(0);
        let boundary = Boundary::from_size(size);

        let mut grid = Grid::new(cols, rows, palette.blank).ok_or(CanvasError::CanvasTooLarge {
            width: size.width,
            height: size.height,
        })?;

        // Top and bottom border
        for y in [0, rows.saturating_sub(1)] {
            if let Some(row) = grid.row_mut(y) {
                row.fill(palette.horizontal_border);
            }
        }

        // Left and right border
        for y in boundary.top..=boundary.bottom {
            if let Some(y) = to_index(y) {
                grid.set(0, y, palette.vertical_border);
                grid.set(cols.saturating_sub(1), y, palette.vertical_border);
            }
        }

        debug!(width = size.width, height = size.height, "Created canvas");

        Ok(Self {
            grid,
            size,
            boundary,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the character at a point, if it lies on the grid
    pub fn cell(&self, p: Point) -> Option<char> {
        self.grid.cell(to_index(p.x)?, to_index(p.y)?)
    }

    /// Set every cell between `x1` and `x2` (inclusive, either order) on row `y`
    ///
    /// Both x coordinates are clamped into the drawing area. The row is not
    /// clamped; it must already be known to intersect the area.
    pub fn draw_horizontal(&mut self, x1: i32, x2: i32, y: i32, color: char) {
        let x1 = self.boundary.clamp(x1, Axis::Horizontal);
        let x2 = self.boundary.clamp(x2, Axis::Horizontal);
        let Some(row) = to_index(y) else {
            return;
        };
        for x in x1.min(x2)..=x1.max(x2) {
            if let Some(col) = to_index(x) {
                self.grid.set(col, row, color);
            }
        }
    }

    /// Set every cell between `y1` and `y2` (inclusive, either order) in column `x`
    ///
    /// Both y coordinates are clamped into the drawing area; the column is not.
    pub fn draw_vertical(&mut self, y1: i32, y2: i32, x: i32, color: char) {
        let y1 = self.boundary.clamp(y1, Axis::Vertical);
        let y2 = self.boundary.clamp(y2, Axis::Vertical);
        let Some(col) = to_index(x) else {
            return;
        };
        for y in y1.min(y2)..=y1.max(y2) {
            if let Some(row) = to_index(y) {
                self.grid.set(col, row, color);
            }
        }
    }

    /// Draw a horizontal or vertical line; sloped lines are ignored
    pub fn draw_line(&mut self, from: Point, to: Point, color: char) {
        if is_horizontal(from, to) {
            self.draw_horizontal(from.x, to.x, from.y, color);
        } else if is_vertical(from, to) {
            self.draw_vertical(from.y, to.y, from.x, color);
        }
    }

    /// Draw the outline of the rectangle spanned by two opposite corners
    ///
    /// Collinear corners draw a single line. Otherwise each border segment
    /// is drawn only if it intersects the drawing area, so a rectangle
    /// hanging off the canvas keeps just its visible sides.
    pub fn draw_rectangle(&mut self, from: Point, to: Point, color: char) {
        if is_horizontal(from, to) || is_vertical(from, to) {
            self.draw_line(from, to, color);
            return;
        }

        for (a, b) in rectangle_edges(from, to) {
            if self.boundary.intersects_segment(a, b) {
                self.draw_line(a, b, color);
            }
        }
    }

    /// Recolor the 4-connected region of uniform color containing `at`
    ///
    /// Returns the number of cells that were recolored.
    pub fn fill(&mut self, at: Point, color: char) -> usize {
        flood_fill(&mut self.grid, &self.boundary, at, color)
    }

    /// Iterate over the rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.grid.iter_rows()
    }

    /// Render the canvas as text rows, top row first
    pub fn render(&self) -> Vec<String> {
        self.rows().map(Row::text).collect()
    }
}

/// Convert a coordinate to a grid index, rejecting negative values
pub(crate) fn to_index(v: i32) -> Option<usize> {
    usize::try_from(v).ok()
}
