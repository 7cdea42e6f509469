//! Command text parser
//!
//! Converts lines of user input into typed drawing commands.

mod error;
mod line;

pub use error::ParseError;
pub use line::CommandParser;
