//! Configuration for the canvas front ends

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Palette;
use crate::engine::{Engine, Limits};
use crate::parser::CommandParser;

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid glyph {glyph:?} for palette.{field} in {path}: glyphs must be one column wide")]
    InvalidGlyph {
        path: PathBuf,
        field: &'static str,
        glyph: char,
    },
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt printed before each interactive command
    pub prompt: String,
    /// Glyphs for borders, blanks and lines
    pub palette: Palette,
    /// Maximum canvas dimensions
    pub limits: Limits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "enter command: ".to_string(),
            palette: Palette::default(),
            limits: Limits::default(),
        }
    }
}

impl Config {
    /// Load a JSON configuration file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some((field, glyph)) = config.palette.invalid_glyph() {
            return Err(ConfigError::InvalidGlyph {
                path: path.to_path_buf(),
                field,
                glyph,
            });
        }

        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build an engine using this configuration
    pub fn engine(&self) -> Engine {
        Engine::new()
            .with_palette(self.palette)
            .with_limits(self.limits)
    }

    /// Build a parser that colors lines with the configured glyph
    pub fn parser(&self) -> CommandParser {
        CommandParser::with_line_color(self.palette.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.prompt, "enter command: ");
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"palette": {{"line": "*"}}, "limits": {{"max_width": 80}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.prompt, "enter command: ");
        assert_eq!(config.palette.line, '*');
        assert_eq!(config.palette.horizontal_border, '-');
        assert_eq!(config.limits.max_width, Some(80));
        assert_eq!(config.limits.max_height, None);
        assert_eq!(config.parser().line_color(), '*');
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_wide_glyphs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"palette": {{"blank": "中"}}}}"#).unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidGlyph {
                field: "blank",
                glyph: '中',
                ..
            }
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"palette": {{"line": "\t"}}}}"#).unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlyph { field: "line", .. }));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
