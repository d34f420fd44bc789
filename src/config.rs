// src/config.rs
//! Optional JSON configuration.
//!
//! Looked up at `<config dir>/pandoc-preview/config.json` unless a path is
//! given explicitly. Every field has a default, so a missing file, an empty
//! object or a partial file are all valid.

use crate::error::ConfigError;
use crate::preview::pandoc::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "pandoc-preview";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub converter: ConverterConfig,
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub program: String,
    pub extra_args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig { program: DEFAULT_PROGRAM.to_string(), extra_args: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub wrap: bool,
    pub highlight: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig { wrap: true, highlight: true }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_program(mut self, program: Option<String>) -> Self {
        if let Some(program) = program {
            self.converter.program = program;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.converter.program, "pandoc");
        assert!(config.converter.extra_args.is_empty());
        assert!(config.viewer.wrap);
        assert!(config.viewer.highlight);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "converter": { "extra_args": ["--wrap=none"] } }"#);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.converter.program, "pandoc");
        assert_eq!(config.converter.extra_args, ["--wrap=none"]);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_empty_object() {
        let file = write_config("{}");
        assert_eq!(Config::load(Some(file.path())).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let file = write_config("{ converter = 1 }");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_program_override() {
        let config = Config::default().with_program(Some("/opt/pandoc/bin/pandoc".to_string()));
        assert_eq!(config.converter.program, "/opt/pandoc/bin/pandoc");
        assert_eq!(Config::default().with_program(None).converter.program, "pandoc");
    }
}
