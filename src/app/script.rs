//! Non-interactive command scripts
//!
//! A script is a sequence of command lines. Blank lines and lines starting
//! with `#` are skipped, and `Q` ends the script early.

use tracing::debug;

use super::config::Config;
use crate::core::{CanvasError, Command, Snapshot};
use crate::engine::Engine;
use crate::parser::ParseError;

/// A script line that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: Invalid command: {input} ({source})")]
    Syntax {
        line: usize,
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: Invalid Parameter: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: CanvasError,
    },
}

/// Result of running a script
#[derive(Debug)]
pub struct ScriptReport {
    /// Engine state after the last command
    pub engine: Engine,
    /// Number of commands that were applied
    pub executed: usize,
    /// Lines that were skipped because of an error
    pub errors: Vec<ScriptError>,
    /// Whether the script ended with `Q`
    pub quit: bool,
}

/// Run every command in `source`
///
/// With `strict`, the first failing line aborts the run. Otherwise errors
/// are collected and the remaining lines still run.
pub fn run_script(config: &Config, source: &str, strict: bool) -> Result<ScriptReport, ScriptError> {
    let parser = config.parser();
    let mut report = ScriptReport {
        engine: config.engine(),
        executed: 0,
        errors: Vec::new(),
        quit: false,
    };

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = match parser.parse(trimmed) {
            Ok(Command::Quit) => {
                debug!(line, "Script quit");
                report.quit = true;
                break;
            }
            Ok(command) => report
                .engine
                .execute(&command)
                .map(|_| ())
                .map_err(|source| ScriptError::Rejected { line, source }),
            Err(source) => Err(ScriptError::Syntax {
                line,
                input: trimmed.to_string(),
                source,
            }),
        };

        match result {
            Ok(()) => report.executed += 1,
            Err(e) if strict => return Err(e),
            Err(e) => report.errors.push(e),
        }
    }

    Ok(report)
}

impl ScriptReport {
    /// Check the final canvas against a JSON snapshot
    ///
    /// A script that never created a canvas matches nothing.
    pub fn matches_snapshot(&self, expected_json: &str) -> Result<bool, serde_json::Error> {
        let expected = Snapshot::from_json(expected_json)?;
        Ok(self
            .engine
            .snapshot()
            .is_some_and(|actual| actual.content_equals(&expected)))
    }
}
