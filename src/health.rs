// src/health.rs
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    Found { path: PathBuf, version: Option<String> },
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub program: String,
    pub status: ToolStatus,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, ToolStatus::Found { .. })
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ToolStatus::Found { path, version } => {
                write!(f, "{} {} found at {}", "OK".green().bold(), self.program, path.display())?;
                if let Some(version) = version {
                    write!(f, " ({version})")?;
                }
                Ok(())
            }
            ToolStatus::Missing => write!(
                f,
                "{} converter not found on path: {}",
                "ERROR".red().bold(),
                self.program
            ),
        }
    }
}

/// Resolves the converter on the search path. Nothing is converted.
pub fn check_tool_availability(program: &str) -> HealthReport {
    let status = match which::which(program) {
        Ok(path) => {
            let version = version_line(&path);
            ToolStatus::Found { path, version }
        }
        Err(err) => {
            log::debug!("{program} not resolvable: {err}");
            ToolStatus::Missing
        }
    };
    HealthReport { program: program.to_string(), status }
}

fn version_line(path: &Path) -> Option<String> {
    let output = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
