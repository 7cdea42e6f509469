//! Canvas errors
//!
//! Every variant describes a rejected caller request. They are raised
//! before any mutation, so a failed command leaves the canvas untouched.

/// Error type for canvas commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid canvas width")]
    InvalidWidth(i32),

    #[error("Invalid canvas height")]
    InvalidHeight(i32),

    #[error("Canvas too large")]
    CanvasTooLarge { width: i32, height: i32 },

    #[error("Canvas not initialized")]
    NotInitialized,

    #[error("Slope line not supported")]
    SlopedLine,

    #[error("Line outside of canvas")]
    LineOutside,

    #[error("Rectangle outside of canvas")]
    RectangleOutside,

    #[error("start point is not within canvas")]
    FillStartOutside,

    #[error("Unsupported command")]
    UnsupportedCommand,
}
