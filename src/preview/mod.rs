// src/preview/mod.rs
use std::path::{Path, PathBuf};

pub mod format;
pub mod pandoc;

pub use format::{detect_format, InputFormat};
pub use pandoc::PandocConverter;

use crate::error::{ConversionError, PreviewError};
use crate::host::Host;
use crate::viewer::{present, SurfaceId};

/// Turns a source file into Markdown text.
pub trait Converter {
    fn convert(&self, path: &Path, format: InputFormat) -> Result<String, ConversionError>;
}

/// The two preview commands. Each either opens exactly one surface or
/// sends exactly one notice, never both.
pub struct Previewer<C: Converter> {
    converter: C,
}

impl<C: Converter> Previewer<C> {
    pub fn new(converter: C) -> Self {
        Previewer { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Previews the host's current document. Unsaved documents are rejected
    /// before the converter runs.
    pub fn preview_active_document<H: Host + ?Sized>(
        &self,
        host: &mut H,
    ) -> Result<SurfaceId, PreviewError> {
        let result = match host.active_document() {
            Some(path) => self.render(host, &path),
            None => Err(PreviewError::NotSaved),
        };
        report(host, result)
    }

    pub fn preview_file<H: Host + ?Sized>(
        &self,
        host: &mut H,
        path: &str,
    ) -> Result<SurfaceId, PreviewError> {
        let result = readable_file(path).and_then(|path| self.render(host, &path));
        report(host, result)
    }

    fn render<H: Host + ?Sized>(&self, host: &mut H, path: &Path) -> Result<SurfaceId, PreviewError> {
        let format = detect_format(&path.to_string_lossy());
        log::debug!("previewing {} as {}", path.display(), format);
        let text = self.converter.convert(path, format)?;
        Ok(present(host, &text))
    }
}

fn report<H: Host + ?Sized>(
    host: &mut H,
    result: Result<SurfaceId, PreviewError>,
) -> Result<SurfaceId, PreviewError> {
    if let Err(err) = &result {
        host.notify(&err.to_string());
    }
    result
}

fn readable_file(path: &str) -> Result<PathBuf, PreviewError> {
    if path.trim().is_empty() {
        return Err(PreviewError::PathRequired);
    }

    let path = PathBuf::from(path);
    if !path.is_file() || std::fs::File::open(&path).is_err() {
        return Err(PreviewError::FileNotFound { path });
    }
    Ok(path)
}
