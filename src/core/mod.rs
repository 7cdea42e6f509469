//! Canvas Core Module
//!
//! Platform-independent drawing state. This module contains:
//! - Geometry primitives and the drawing-area boundary
//! - The character grid and the bordered canvas built on it
//! - Line and rectangle rasterization with clipping
//! - Iterative block fill
//! - Command validation
//! - Deterministic snapshot generation
//!
//! The core performs no I/O: given the same sequence of commands, it will
//! always produce the same grid.

mod boundary;
mod canvas;
mod command;
mod error;
mod fill;
mod geometry;
mod grid;
mod palette;
mod snapshot;
mod validate;

pub use boundary::{is_horizontal, is_vertical, Boundary};
pub use canvas::Canvas;
pub use command::Command;
pub use error::CanvasError;
pub use fill::flood_fill;
pub use geometry::{rectangle_edges, Axis, Point, Size};
pub use grid::{Grid, Row};
pub use palette::{Palette, BLANK, DEFAULT_LINE_COLOR, HORIZONTAL_BORDER, VERTICAL_BORDER};
pub use snapshot::Snapshot;
pub use validate::{validate, MIN_HEIGHT, MIN_WIDTH};
