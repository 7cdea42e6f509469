//! Textcanvas Library
//!
//! A text-mode drawing surface: a bordered grid of characters that can be
//! drawn on with horizontal and vertical lines, rectangles, and block fill.
//! This crate provides:
//!
//! - `core`: Geometry, canvas grid, rasterizer, flood fill, validation
//! - `parser`: Text command parser
//! - `engine`: Owner of the live canvas, validate-then-apply
//! - `app`: Configuration and logging for the binaries
//!
//! ```
//! use textcanvas::engine::Engine;
//! use textcanvas::parser::CommandParser;
//!
//! let parser = CommandParser::new();
//! let mut engine = Engine::new();
//! for line in ["C 5 3", "B 1 1 o"] {
//!     engine.execute(&parser.parse_line(line)).unwrap();
//! }
//! assert_eq!(engine.render().unwrap()[1], "|ooo|");
//! ```

pub mod app;
pub mod core;
pub mod engine;
pub mod parser;
