//! Command line parser
//!
//! Turns one line of user input into a [`Command`]. The grammar is a
//! command letter followed by whitespace-separated arguments:
//!
//! ```text
//! C w h            new canvas
//! L x1 y1 x2 y2    line
//! R x1 y1 x2 y2    rectangle
//! B x y c          block fill with color c
//! Q                quit
//! ```
//!
//! Numbers are unsigned decimal. The parser only checks syntax; geometry
//! is left to the canvas validator.

use std::str::FromStr;

use tracing::debug;
use unicode_width::UnicodeWidthChar;

use super::error::ParseError;
use crate::core::{Command, Point, Size, DEFAULT_LINE_COLOR};

/// Stateless parser producing commands from text lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandParser {
    /// Color assigned to lines and rectangles
    line_color: char,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR,
        }
    }

    /// Use `color` for parsed line and rectangle commands
    pub fn with_line_color(color: char) -> Self {
        Self { line_color: color }
    }

    pub fn line_color(&self) -> char {
        self.line_color
    }

    /// Parse a single line of input
    pub fn parse(&self, input: &str) -> Result<Command, ParseError> {
        let mut tokens = input.split_whitespace();
        let name = tokens.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match name {
            "C" => {
                let [w, h] = arguments::<2>('C', &args)?;
                Ok(Command::NewCanvas(Size::new(number(w)?, number(h)?)))
            }
            "L" => {
                let (from, to) = two_points('L', &args)?;
                Ok(Command::Line {
                    from,
                    to,
                    color: self.line_color,
                })
            }
            "R" => {
                let (from, to) = two_points('R', &args)?;
                Ok(Command::Rectangle {
                    from,
                    to,
                    color: self.line_color,
                })
            }
            "B" => {
                let [x, y, c] = arguments::<3>('B', &args)?;
                Ok(Command::BlockFill {
                    at: Point::new(number(x)?, number(y)?),
                    color: color(c)?,
                })
            }
            "Q" => {
                let [] = arguments::<0>('Q', &args)?;
                Ok(Command::Quit)
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Parse a line, folding any syntax error into [`Command::Invalid`]
    pub fn parse_line(&self, input: &str) -> Command {
        match self.parse(input) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected input {:?}: {}", input, e);
                Command::Invalid(input.to_string())
            }
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandParser::new().parse(s)
    }
}

fn arguments<'a, const N: usize>(
    command: char,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::WrongArity {
        command,
        expected: N,
        found: args.len(),
    })
}

fn two_points(command: char, args: &[&str]) -> Result<(Point, Point), ParseError> {
    let [x1, y1, x2, y2] = arguments::<4>(command, args)?;
    Ok((
        Point::new(number(x1)?, number(y1)?),
        Point::new(number(x2)?, number(y2)?),
    ))
}

fn number(token: &str) -> Result<i32, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

fn color(token: &str) -> Result<char, ParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.width() == Some(1) => Ok(c),
        _ => Err(ParseError::InvalidColor(token.to_string())),
    }
}
