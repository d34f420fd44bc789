// src/preview/format.rs
use std::fmt;

/// Pandoc reader used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Latex,
    Docx,
    Html,
    Odt,
    Plain,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Latex => "latex",
            InputFormat::Docx => "docx",
            InputFormat::Html => "html",
            InputFormat::Odt => "odt",
            InputFormat::Plain => "plain",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension to reader. Matched literally, lowercase only.
pub const FORMAT_TABLE: &[(&str, InputFormat)] = &[
    ("tex", InputFormat::Latex),
    ("docx", InputFormat::Docx),
    ("html", InputFormat::Html),
    ("odt", InputFormat::Odt),
    ("txt", InputFormat::Plain),
];

pub const DEFAULT_FORMAT: InputFormat = InputFormat::Plain;

/// Picks the reader from whatever follows the last '.' in `path`.
/// Never fails: unknown or missing extensions map to [`DEFAULT_FORMAT`].
pub fn detect_format(path: &str) -> InputFormat {
    let Some((_, extension)) = path.rsplit_once('.') else {
        return DEFAULT_FORMAT;
    };

    FORMAT_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, format)| *format)
        .unwrap_or(DEFAULT_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(detect_format("thesis.tex"), InputFormat::Latex);
        assert_eq!(detect_format("report.docx"), InputFormat::Docx);
        assert_eq!(detect_format("index.html"), InputFormat::Html);
        assert_eq!(detect_format("notes.odt"), InputFormat::Odt);
        assert_eq!(detect_format("readme.txt"), InputFormat::Plain);
    }

    #[test]
    fn test_reader_names() {
        let names: Vec<&str> = FORMAT_TABLE.iter().map(|(_, f)| f.as_str()).collect();
        assert_eq!(names, ["latex", "docx", "html", "odt", "plain"]);
    }

    #[test]
    fn test_unknown_or_missing_extension_falls_back() {
        assert_eq!(detect_format("slides.pptx"), InputFormat::Plain);
        assert_eq!(detect_format("Makefile"), InputFormat::Plain);
        assert_eq!(detect_format(""), InputFormat::Plain);
        assert_eq!(detect_format("trailing."), InputFormat::Plain);
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(detect_format("archive.tex.gz"), InputFormat::Plain);
        assert_eq!(detect_format("page.old.html"), InputFormat::Html);
        assert_eq!(detect_format("/home/me/v1.2/paper.tex"), InputFormat::Latex);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(detect_format("report.TEX"), InputFormat::Plain);
        assert_eq!(detect_format("report.Docx"), InputFormat::Plain);
        assert_eq!(detect_format("report.tex"), InputFormat::Latex);
    }
}
