// src/editor/buffer.rs
use crate::viewer::SurfaceFlags;

/// Text behind one viewer surface. Always holds at least one line.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    content: Vec<String>,
    flags: SurfaceFlags,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        ScratchBuffer { content: vec![String::new()], flags: SurfaceFlags::default() }
    }

    /// Swaps in `lines`. A non-modifiable buffer keeps its content and
    /// returns false.
    pub fn replace_lines(&mut self, lines: Vec<String>) -> bool {
        if !self.flags.modifiable {
            log::warn!("refusing to replace lines of a non-modifiable buffer");
            return false;
        }

        self.content = if lines.is_empty() { vec![String::new()] } else { lines };
        true
    }

    pub fn set_flags(&mut self, flags: SurfaceFlags) {
        self.flags = flags;
    }

    pub fn flags(&self) -> &SurfaceFlags {
        &self.flags
    }

    pub fn lines(&self) -> &[String] {
        &self.content
    }

    pub fn get_line(&self, index: usize) -> Option<&String> {
        self.content.get(index)
    }

    pub fn total_lines(&self) -> usize {
        self.content.len()
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
