//! Parse errors

/// Error type for command lines that match no grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{command}' takes {expected} arguments, got {found}")]
    WrongArity {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("invalid color '{0}': must be a single printable character")]
    InvalidColor(String),
}
