//! Drawing commands
//!
//! A command is an immutable value carrying exactly the fields its kind
//! needs. The parser produces them; the validator and the engine consume
//! them without modification.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Size};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the canvas with a fresh one of the given size
    NewCanvas(Size),
    /// Horizontal or vertical line between two points
    Line { from: Point, to: Point, color: char },
    /// Axis-aligned rectangle outline spanned by two opposite corners
    Rectangle { from: Point, to: Point, color: char },
    /// Recolor the connected region containing `at`
    BlockFill { at: Point, color: char },
    /// End the session
    Quit,
    /// Input that did not match any command grammar
    Invalid(String),
}

impl Command {
    /// Short name of the command kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::NewCanvas(_) => "new-canvas",
            Command::Line { .. } => "line",
            Command::Rectangle { .. } => "rectangle",
            Command::BlockFill { .. } => "block-fill",
            Command::Quit => "quit",
            Command::Invalid(_) => "invalid",
        }
    }
}
