//! Canvas Grid
//!
//! A 2D grid of character cells, stored row-major. Rows are indexed by y
//! and cells within a row by x.

use serde::{Deserialize, Serialize};

/// A row of cells in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<char>,
}

impl Row {
    /// Allocate a row of `cols` cells, or `None` if the allocation fails
    pub fn new(cols: usize, fill: char) -> Option<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(cols).ok()?;
        cells.resize(cols, fill);
        Some(Self { cells })
    }

    /// Overwrite every cell of the row
    pub fn fill(&mut self, c: char) {
        self.cells.fill(c);
    }

    /// Render the row as a string
    pub fn text(&self) -> String {
        self.cells.iter().collect()
    }
}

/// The canvas grid - a 2D array of characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// The rows in the grid
    rows: Vec<Row>,
    /// Number of columns
    cols: usize,
}

impl Grid {
    /// Create a grid of `rows` rows by `cols` columns, every cell set to `fill`
    ///
    /// Returns `None` when the grid would not fit in memory.
    pub fn new(cols: usize, rows: usize, fill: char) -> Option<Self> {
        let bytes = cols
            .checked_mul(rows)?
            .checked_mul(std::mem::size_of::<char>())?;
        if bytes > isize::MAX as usize {
            return None;
        }

        let mut grid = Vec::new();
        grid.try_reserve_exact(rows).ok()?;
        for _ in 0..rows {
            grid.push(Row::new(cols, fill)?);
        }
        Some(Self { rows: grid, cols })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the character at a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.cells.get(col)).copied()
    }

    /// Get a mutable reference to a cell
    pub fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut char> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    /// Set a cell, ignoring positions outside the grid
    pub fn set(&mut self, col: usize, row: usize, c: char) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = c;
        }
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Get a mutable reference to a row
    pub fn row_mut(&mut self, row: usize) -> Option<&mut Row> {
        self.rows.get_mut(row)
    }

    /// Iterate over the rows, top row first
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}
