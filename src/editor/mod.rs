// src/editor/mod.rs
pub mod buffer;
pub mod cursor;
pub mod syntax;

pub use buffer::ScratchBuffer;
pub use cursor::Cursor;
pub use syntax::SyntaxHighlighter;
