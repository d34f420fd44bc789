// src/preview/pandoc.rs
use super::*;
use crate::config::ConverterConfig;
use crate::error::ConversionError;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub const DEFAULT_PROGRAM: &str = "pandoc";
pub const OUTPUT_FORMAT: &str = "markdown";

/// Runs pandoc once per request and captures its stdout as Markdown.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: String,
    extra_args: Vec<String>,
}

impl PandocConverter {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        PandocConverter { program: program.into(), extra_args: Vec::new() }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::with_program(config.program.clone()).extra_args(config.extra_args.clone())
    }

    /// Arguments inserted between the program and `-f`.
    pub fn extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self, path: &Path, format: InputFormat) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.extra_args.iter().map(OsString::from).collect();
        args.extend(
            ["-f", format.as_str(), "-t", OUTPUT_FORMAT]
                .into_iter()
                .map(OsString::from),
        );
        args.push(argument_path(path).into_os_string());
        args
    }

    pub fn command(&self, path: &Path, format: InputFormat) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(path, format))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// The invocation as it would be typed in a shell.
    pub fn display_command(&self, path: &Path, format: InputFormat) -> String {
        std::iter::once(shell_quote(&self.program))
            .chain(
                self.args(path, format)
                    .iter()
                    .map(|arg| shell_quote(&arg.to_string_lossy())),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Same as [`Converter::convert`], without blocking an async runtime thread.
    pub async fn convert_async(
        &self,
        path: &Path,
        format: InputFormat,
    ) -> Result<String, ConversionError> {
        log::debug!("running {}", self.display_command(path, format));
        let output = tokio::process::Command::new(&self.program)
            .args(self.args(path, format))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| self.spawn_failed(source))?;

        collect_output(output, path)
    }

    fn spawn_failed(&self, source: std::io::Error) -> ConversionError {
        ConversionError::SpawnFailed { program: self.program.clone(), source }
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for PandocConverter {
    fn convert(&self, path: &Path, format: InputFormat) -> Result<String, ConversionError> {
        log::debug!("running {}", self.display_command(path, format));
        let output = self
            .command(path, format)
            .output()
            .map_err(|source| self.spawn_failed(source))?;

        collect_output(output, path)
    }
}

fn collect_output(output: Output, path: &Path) -> Result<String, ConversionError> {
    if !output.status.success() {
        return Err(ConversionError::ExitFailure {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    if text.trim().is_empty() {
        return Err(ConversionError::EmptyOutput { path: path.to_path_buf() });
    }
    Ok(text)
}

// Keeps a leading '-' from being parsed as an option.
fn argument_path(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().starts_with('-') {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

pub fn shell_quote(word: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c);
    if !word.is_empty() && word.chars().all(safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECHO_ARGS: &str = r#"printf '%s\n' "$@""#;

    fn sh(script: &str) -> PandocConverter {
        PandocConverter::with_program("sh").extra_args(vec![
            "-c".to_string(),
            script.to_string(),
            "sh".to_string(),
        ])
    }

    #[test]
    fn test_args_layout() {
        let converter = PandocConverter::new().extra_args(vec!["--wrap=none".to_string()]);
        let args = converter.args(Path::new("thesis.tex"), InputFormat::Latex);
        let args: Vec<&str> = args.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args, ["--wrap=none", "-f", "latex", "-t", "markdown", "thesis.tex"]);
    }

    #[test]
    fn test_display_command_quotes_path() {
        let converter = PandocConverter::new();
        assert_eq!(
            converter.display_command(Path::new("my notes/it's.odt"), InputFormat::Odt),
            r"pandoc -f odt -t markdown 'my notes/it'\''s.odt'"
        );
        assert_eq!(
            converter.display_command(Path::new("a.html"), InputFormat::Html),
            "pandoc -f html -t markdown a.html"
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("plain-word_1.txt"), "plain-word_1.txt");
        assert_eq!(shell_quote("$(rm -rf /)"), "'$(rm -rf /)'");
    }

    #[test]
    fn test_missing_binary_is_spawn_failure() {
        let converter = PandocConverter::with_program("pandoc-preview-no-such-binary");
        let err = converter
            .convert(Path::new("doc.tex"), InputFormat::Latex)
            .unwrap_err();
        match err {
            ConversionError::SpawnFailed { program, .. } => {
                assert_eq!(program, "pandoc-preview-no-such-binary")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_path_is_passed_as_one_argument() {
        let text = sh(ECHO_ARGS)
            .convert(Path::new("my doc; echo pwned.docx"), InputFormat::Docx)
            .unwrap();
        let argv: Vec<&str> = text.lines().collect();
        assert_eq!(argv, ["-f", "docx", "-t", "markdown", "my doc; echo pwned.docx"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_leading_dash_path_is_not_an_option() {
        let text = sh(ECHO_ARGS)
            .convert(Path::new("-draft.txt"), InputFormat::Plain)
            .unwrap();
        assert_eq!(text.lines().last(), Some("./-draft.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_captured_verbatim() {
        let text = sh("printf '# Title\\n\\nBody text\\n'")
            .convert(Path::new("x.tex"), InputFormat::Latex)
            .unwrap();
        assert_eq!(text, "# Title\n\nBody text\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_is_reported() {
        for script in ["exit 0", "printf '\\n  \\n'"] {
            let err = sh(script)
                .convert(Path::new("empty.odt"), InputFormat::Odt)
                .unwrap_err();
            assert!(matches!(err, ConversionError::EmptyOutput { ref path } if path == Path::new("empty.odt")));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported_apart_from_empty_output() {
        let err = sh("echo 'partial'; echo 'bad input' >&2; exit 3")
            .convert(Path::new("broken.docx"), InputFormat::Docx)
            .unwrap_err();
        match err {
            ConversionError::ExitFailure { status, stderr } => {
                assert_eq!(status, Some(3));
                assert!(stderr.contains("bad input"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_async_missing_binary() {
        let converter = PandocConverter::with_program("pandoc-preview-no-such-binary");
        let err = converter
            .convert_async(Path::new("doc.tex"), InputFormat::Latex)
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_async_matches_blocking_invocation() {
        let converter = sh(ECHO_ARGS);
        let path = Path::new("page.html");
        let blocking = converter.convert(path, InputFormat::Html).unwrap();
        let awaited = converter.convert_async(path, InputFormat::Html).await.unwrap();
        assert_eq!(blocking, awaited);
    }
}
