//! Deterministic snapshot generation
//!
//! Snapshots capture a rendered canvas in a serializable format for
//! testing and for the headless runner. Given the same command sequence,
//! the engine must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::boundary::Boundary;
use super::canvas::Canvas;

/// A complete snapshot of a canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions, border included
    pub cols: usize,
    pub rows: usize,
    /// Drawing area bounds
    pub boundary: Boundary,
    /// Rendered rows, top row first
    pub text: Vec<String>,
}

impl Snapshot {
    /// Create a snapshot from the current canvas state
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Snapshot {
            cols: canvas.grid().cols(),
            rows: canvas.grid().rows(),
            boundary: *canvas.boundary(),
            text: canvas.render(),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rendered rows joined by newlines, with a trailing newline
    ///
    /// Trailing blanks are kept so every row has the full canvas width.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.text {
            result.push_str(row);
            result.push('\n');
        }
        result
    }

    /// Compare the drawn content of two snapshots
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.cols == other.cols && self.rows == other.rows && self.text == other.text
    }
}
