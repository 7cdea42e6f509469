//! Drawing Engine
//!
//! Owns the live canvas and applies commands to it. Every command is
//! validated against the current canvas before anything is mutated, so a
//! rejected command leaves the engine exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{validate, Canvas, CanvasError, Command, Palette, Size, Snapshot};

/// Upper bounds on the size of a new canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted width, border columns included
    pub max_width: Option<i32>,
    /// Largest accepted drawable height
    pub max_height: Option<i32>,
}

impl Limits {
    fn check(&self, size: Size) -> Result<(), CanvasError> {
        let too_wide = self.max_width.is_some_and(|max| size.width > max);
        let too_high = self.max_height.is_some_and(|max| size.height > max);
        if too_wide || too_high {
            return Err(CanvasError::CanvasTooLarge {
                width: size.width,
                height: size.height,
            });
        }
        Ok(())
    }
}

/// What an accepted command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new canvas replaced the previous one
    Created(Size),
    /// A line or rectangle was rasterized
    Drawn,
    /// A block fill recolored this many cells
    Filled(usize),
}

/// Single owner of the canvas
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// The live canvas, `None` until the first new-canvas command
    canvas: Option<Canvas>,
    /// Glyphs for newly created canvases
    palette: Palette,
    limits: Limits,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Get a reference to the live canvas
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.canvas.is_some()
    }

    /// Validate and apply a single command
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, CanvasError> {
        debug!(kind = command.kind(), "Executing {:?}", command);

        if let Err(e) = self.check(command) {
            warn!(kind = command.kind(), "Rejected command: {}", e);
            return Err(e);
        }

        if let Command::NewCanvas(size) = command {
            let canvas = Canvas::with_palette(*size, self.palette).map_err(|e| {
                warn!(width = size.width, height = size.height, "Cannot allocate canvas: {}", e);
                e
            })?;
            self.canvas = Some(canvas);
            return Ok(Outcome::Created(*size));
        }

        // Validation already rejected drawing on a missing canvas
        let canvas = self.canvas.as_mut().ok_or(CanvasError::NotInitialized)?;
        let outcome = match command {
            Command::Line { from, to, color } => {
                canvas.draw_line(*from, *to, *color);
                Outcome::Drawn
            }
            Command::Rectangle { from, to, color } => {
                canvas.draw_rectangle(*from, *to, *color);
                Outcome::Drawn
            }
            Command::BlockFill { at, color } => Outcome::Filled(canvas.fill(*at, *color)),
            Command::NewCanvas(_) | Command::Quit | Command::Invalid(_) => {
                return Err(CanvasError::UnsupportedCommand)
            }
        };

        Ok(outcome)
    }

    fn check(&self, command: &Command) -> Result<(), CanvasError> {
        validate(command, self.canvas.as_ref().map(Canvas::boundary))?;
        if let Command::NewCanvas(size) = command {
            self.limits.check(*size)?;
        }
        Ok(())
    }

    /// Render the current frame, top row first
    pub fn render(&self) -> Option<Vec<String>> {
        self.canvas.as_ref().map(Canvas::render)
    }

    /// Snapshot of the current canvas
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.canvas.as_ref().map(Snapshot::from_canvas)
    }
}
