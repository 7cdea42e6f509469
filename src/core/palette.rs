//! Glyphs used to paint a canvas

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Character assigned to blank cells
pub const BLANK: char = ' ';
/// Character of the top and bottom border rows
pub const HORIZONTAL_BORDER: char = '-';
/// Character of the left and right border columns
pub const VERTICAL_BORDER: char = '|';
/// Color of lines and rectangles
pub const DEFAULT_LINE_COLOR: char = 'x';

/// The set of glyphs a canvas is created and drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub blank: char,
    pub horizontal_border: char,
    pub vertical_border: char,
    /// Color given to parsed line and rectangle commands
    pub line: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            blank: BLANK,
            horizontal_border: HORIZONTAL_BORDER,
            vertical_border: VERTICAL_BORDER,
            line: DEFAULT_LINE_COLOR,
        }
    }
}

impl Palette {
    /// First glyph that does not take exactly one column, with its field name
    ///
    /// Wide and control characters would misalign the rendered rows.
    pub fn invalid_glyph(&self) -> Option<(&'static str, char)> {
        [
            ("blank", self.blank),
            ("horizontal_border", self.horizontal_border),
            ("vertical_border", self.vertical_border),
            ("line", self.line),
        ]
        .into_iter()
        .find(|&(_, c)| c.width() != Some(1))
    }
}
