//! Command validation
//!
//! Checks a command's geometry against the current drawing area before
//! anything is mutated. Validation is read-only and stops at the first
//! rule that fails.

use super::boundary::{is_horizontal, is_vertical, Boundary};
use super::command::Command;
use super::error::CanvasError;
use super::geometry::rectangle_edges;

/// Smallest canvas width: two border columns around one drawable column
pub const MIN_WIDTH: i32 = 3;
/// Smallest drawable height
pub const MIN_HEIGHT: i32 = 0;

/// Validate `command` against the drawing area of the live canvas
///
/// `boundary` is `None` while no canvas has been created.
pub fn validate(command: &Command, boundary: Option<&Boundary>) -> Result<(), CanvasError> {
    match command {
        Command::NewCanvas(size) => {
            if size.width < MIN_WIDTH {
                return Err(CanvasError::InvalidWidth(size.width));
            }
            if size.height < MIN_HEIGHT {
                return Err(CanvasError::InvalidHeight(size.height));
            }
            Ok(())
        }
        Command::Line { from, to, .. } => {
            let bounds = boundary.ok_or(CanvasError::NotInitialized)?;
            if !is_horizontal(*from, *to) && !is_vertical(*from, *to) {
                return Err(CanvasError::SlopedLine);
            }
            if !bounds.intersects_segment(*from, *to) {
                return Err(CanvasError::LineOutside);
            }
            Ok(())
        }
        Command::Rectangle { from, to, .. } => {
            let bounds = boundary.ok_or(CanvasError::NotInitialized)?;
            if is_horizontal(*from, *to) || is_vertical(*from, *to) {
                // Degenerates to a single line
                if !bounds.intersects_segment(*from, *to) {
                    return Err(CanvasError::LineOutside);
                }
                return Ok(());
            }
            let visible = rectangle_edges(*from, *to)
                .iter()
                .any(|&(a, b)| bounds.intersects_segment(a, b));
            if !visible {
                return Err(CanvasError::RectangleOutside);
            }
            Ok(())
        }
        Command::BlockFill { at, .. } => {
            let bounds = boundary.ok_or(CanvasError::NotInitialized)?;
            if !bounds.contains(*at) {
                return Err(CanvasError::FillStartOutside);
            }
            Ok(())
        }
        Command::Quit | Command::Invalid(_) => Err(CanvasError::UnsupportedCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Size};

    fn bounds() -> Boundary {
        // Area is [1, 18] x [1, 4]
        Boundary::from_size(Size::new(20, 4))
    }

    fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Command {
        Command::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            color: 'x',
        }
    }

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Command {
        Command::Rectangle {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            color: 'x',
        }
    }

    fn fill(x: i32, y: i32) -> Command {
        Command::BlockFill {
            at: Point::new(x, y),
            color: 'o',
        }
    }

    #[test]
    fn test_new_canvas_dimensions() {
        let check = |w, h| validate(&Command::NewCanvas(Size::new(w, h)), None);
        assert_eq!(check(3, 0), Ok(()));
        assert_eq!(check(20, 4), Ok(()));
        assert_eq!(check(2, 4), Err(CanvasError::InvalidWidth(2)));
        assert_eq!(check(0, 0), Err(CanvasError::InvalidWidth(0)));
        assert_eq!(check(5, -1), Err(CanvasError::InvalidHeight(-1)));
        // Width is checked first
        assert_eq!(check(1, -1), Err(CanvasError::InvalidWidth(1)));
    }

    #[test]
    fn test_new_canvas_ignores_existing_canvas() {
        let b = bounds();
        assert_eq!(validate(&Command::NewCanvas(Size::new(4, 1)), Some(&b)), Ok(()));
    }

    #[test]
    fn test_drawing_requires_canvas() {
        assert_eq!(validate(&line(1, 1, 4, 1), None), Err(CanvasError::NotInitialized));
        assert_eq!(validate(&rect(1, 1, 4, 3), None), Err(CanvasError::NotInitialized));
        assert_eq!(validate(&fill(1, 1), None), Err(CanvasError::NotInitialized));
    }

    #[test]
    fn test_line_rules() {
        let b = bounds();
        assert_eq!(validate(&line(1, 2, 6, 2), Some(&b)), Ok(()));
        assert_eq!(validate(&line(6, 1, 6, 4), Some(&b)), Ok(()));
        assert_eq!(validate(&line(0, 2, 40, 2), Some(&b)), Ok(()));
        assert_eq!(validate(&line(1, 1, 3, 3), Some(&b)), Err(CanvasError::SlopedLine));
        assert_eq!(validate(&line(19, 2, 30, 2), Some(&b)), Err(CanvasError::LineOutside));
        assert_eq!(validate(&line(1, 0, 6, 0), Some(&b)), Err(CanvasError::LineOutside));
    }

    #[test]
    fn test_rectangle_rules() {
        let b = bounds();
        assert_eq!(validate(&rect(14, 1, 18, 3), Some(&b)), Ok(()));
        // Only the left side at x = 18 is visible
        assert_eq!(validate(&rect(18, 2, 30, 3), Some(&b)), Ok(()));
        // Bottom side at y = 9 is off the canvas, the rest is clipped
        assert_eq!(validate(&rect(2, 4, 6, 9), Some(&b)), Ok(()));
        assert_eq!(
            validate(&rect(19, 1, 30, 3), Some(&b)),
            Err(CanvasError::RectangleOutside)
        );
        assert_eq!(
            validate(&rect(2, 5, 6, 9), Some(&b)),
            Err(CanvasError::RectangleOutside)
        );
    }

    #[test]
    fn test_rectangle_enclosing_canvas_is_rejected() {
        // Every side lies on or beyond the border, none crosses the area
        let b = bounds();
        assert_eq!(
            validate(&rect(0, 0, 19, 5), Some(&b)),
            Err(CanvasError::RectangleOutside)
        );
    }

    #[test]
    fn test_degenerate_rectangle() {
        let b = bounds();
        assert_eq!(validate(&rect(2, 2, 8, 2), Some(&b)), Ok(()));
        assert_eq!(validate(&rect(2, 5, 8, 5), Some(&b)), Err(CanvasError::LineOutside));
        assert_eq!(validate(&rect(0, 1, 0, 4), Some(&b)), Err(CanvasError::LineOutside));
    }

    #[test]
    fn test_fill_start_must_be_inside() {
        let b = bounds();
        assert_eq!(validate(&fill(1, 1), Some(&b)), Ok(()));
        assert_eq!(validate(&fill(18, 4), Some(&b)), Ok(()));
        assert_eq!(validate(&fill(0, 1), Some(&b)), Err(CanvasError::FillStartOutside));
        assert_eq!(validate(&fill(5, 5), Some(&b)), Err(CanvasError::FillStartOutside));
    }

    #[test]
    fn test_zero_height_canvas_rejects_fill_and_horizontal_lines() {
        let b = Boundary::from_size(Size::new(6, 0));
        assert_eq!(validate(&fill(1, 1), Some(&b)), Err(CanvasError::FillStartOutside));
        assert_eq!(validate(&line(1, 1, 4, 1), Some(&b)), Err(CanvasError::LineOutside));
    }

    #[test]
    fn test_unsupported_commands() {
        let b = bounds();
        assert_eq!(validate(&Command::Quit, Some(&b)), Err(CanvasError::UnsupportedCommand));
        assert_eq!(
            validate(&Command::Invalid("X 1".to_string()), None),
            Err(CanvasError::UnsupportedCommand)
        );
    }
}
