// src/error.rs
//! Error types shared by the converter, the preview commands and config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single converter run.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The converter process could not be started (usually: binary missing).
    #[error("could not start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but exited with a non-zero status.
    #[error("converter exited with {}{}", exit_label(.status), stderr_suffix(.stderr))]
    ExitFailure { status: Option<i32>, stderr: String },

    /// The converter exited cleanly without writing anything to stdout.
    #[error("converter produced no output for '{}'", .path.display())]
    EmptyOutput { path: PathBuf },
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.lines().find(|l| !l.trim().is_empty()) {
        Some(line) => format!(": {}", line.trim()),
        None => String::new(),
    }
}

/// Why a preview request was abandoned. The display text is the message
/// shown to the user.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("document not saved")]
    NotSaved,

    #[error("file path required")]
    PathRequired,

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
