// src/host.rs
use crate::editor::ScratchBuffer;
use crate::viewer::{SurfaceFlags, SurfaceId, ViewerSurface};
use std::path::PathBuf;

/// Everything the preview commands need from the environment they run in.
pub trait Host: ViewerSurface {
    /// Backing file of the document the user is looking at, if it has one.
    fn active_document(&self) -> Option<PathBuf>;
    /// Non-fatal, user-visible message.
    fn notify(&mut self, message: &str);
}

/// In-process host: keeps opened surfaces and notices until the caller
/// renders them.
#[derive(Debug, Default)]
pub struct Session {
    active_document: Option<PathBuf>,
    buffers: Vec<ScratchBuffer>,
    notices: Vec<String>,
}

impl Session {
    pub fn new(active_document: Option<PathBuf>) -> Self {
        Session { active_document, buffers: Vec::new(), notices: Vec::new() }
    }

    pub fn buffers(&self) -> &[ScratchBuffer] {
        &self.buffers
    }

    pub fn buffer(&self, id: SurfaceId) -> Option<&ScratchBuffer> {
        self.buffers.get(id.0)
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn buffer_mut(&mut self, id: SurfaceId) -> Option<&mut ScratchBuffer> {
        let buffer = self.buffers.get_mut(id.0);
        if buffer.is_none() {
            log::warn!("no surface with id {}", id.0);
        }
        buffer
    }
}

impl ViewerSurface for Session {
    fn open_split(&mut self) -> SurfaceId {
        self.buffers.push(ScratchBuffer::new());
        let id = SurfaceId(self.buffers.len() - 1);
        log::info!("opened surface {}", id.0);
        id
    }

    fn set_lines(&mut self, id: SurfaceId, lines: Vec<String>) {
        if let Some(buffer) = self.buffer_mut(id) {
            buffer.replace_lines(lines);
        }
    }

    fn set_flags(&mut self, id: SurfaceId, flags: &SurfaceFlags) {
        if let Some(buffer) = self.buffer_mut(id) {
            buffer.set_flags(flags.clone());
        }
    }
}

impl Host for Session {
    fn active_document(&self) -> Option<PathBuf> {
        self.active_document.clone()
    }

    fn notify(&mut self, message: &str) {
        log::debug!("notice: {message}");
        self.notices.push(message.to_string());
    }
}
