// src/viewer/mod.rs
pub mod print;
pub mod terminal;

/// Handle to a surface opened by a [`ViewerSurface`] host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

pub const MARKDOWN_FILETYPE: &str = "markdown";

/// Buffer options a host applies to a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceFlags {
    pub modifiable: bool,
    pub readonly: bool,
    /// Content type used for highlighting.
    pub filetype: Option<String>,
    pub backing_file: bool,
    pub discard_on_hide: bool,
    pub swapfile: bool,
    pub listed: bool,
}

impl Default for SurfaceFlags {
    /// A freshly created scratch surface: unlisted and file-less, but still editable.
    fn default() -> Self {
        SurfaceFlags {
            modifiable: true,
            readonly: false,
            filetype: None,
            backing_file: false,
            discard_on_hide: false,
            swapfile: false,
            listed: false,
        }
    }
}

impl SurfaceFlags {
    pub fn markdown_preview() -> Self {
        SurfaceFlags {
            modifiable: false,
            readonly: true,
            filetype: Some(MARKDOWN_FILETYPE.to_string()),
            backing_file: false,
            discard_on_hide: true,
            swapfile: false,
            listed: false,
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.filetype.as_deref() == Some(MARKDOWN_FILETYPE)
    }
}

/// The slice of host UI the presenter needs. Hosts treat these calls as
/// infallible.
pub trait ViewerSurface {
    /// Opens a new split holding an empty scratch surface.
    fn open_split(&mut self) -> SurfaceId;
    fn set_lines(&mut self, id: SurfaceId, lines: Vec<String>);
    fn set_flags(&mut self, id: SurfaceId, flags: &SurfaceFlags);
}

/// Shows `text` in a new read-only Markdown surface.
///
/// Lines are written before the surface is locked.
pub fn present<S: ViewerSurface + ?Sized>(surface: &mut S, text: &str) -> SurfaceId {
    let id = surface.open_split();
    surface.set_lines(id, text.lines().map(str::to_string).collect());
    surface.set_flags(id, &SurfaceFlags::markdown_preview());
    id
}
