// src/editor/cursor.rs
use super::buffer::ScratchBuffer;

/// Top-left position of the viewport inside a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(line: usize, col: usize) -> Self {
        Cursor { line, col }
    }

    pub fn move_to(&mut self, buffer: &ScratchBuffer, line: usize, col: usize) {
        self.line = line.min(buffer.total_lines().saturating_sub(1));
        self.col = col.min(buffer.get_line(self.line).map(|l| l.chars().count()).unwrap_or(0));
    }

    pub fn scroll_by(&mut self, buffer: &ScratchBuffer, delta: isize) {
        let line = self.line.saturating_add_signed(delta);
        self.move_to(buffer, line, self.col);
    }

    pub fn to_top(&mut self) {
        self.line = 0;
    }

    pub fn to_bottom(&mut self, buffer: &ScratchBuffer) {
        self.move_to(buffer, usize::MAX, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(n: usize) -> ScratchBuffer {
        let mut buffer = ScratchBuffer::new();
        buffer.replace_lines((0..n).map(|i| format!("line {i}")).collect());
        buffer
    }

    #[test]
    fn test_scroll_is_clamped() {
        let buffer = buffer(10);
        let mut cursor = Cursor::default();

        cursor.scroll_by(&buffer, -3);
        assert_eq!(cursor.line, 0);

        cursor.scroll_by(&buffer, 4);
        assert_eq!(cursor.line, 4);

        cursor.scroll_by(&buffer, 100);
        assert_eq!(cursor.line, 9);
    }

    #[test]
    fn test_top_and_bottom() {
        let buffer = buffer(5);
        let mut cursor = Cursor::new(2, 0);
        cursor.to_bottom(&buffer);
        assert_eq!(cursor, Cursor::new(4, 0));
        cursor.to_top();
        assert_eq!(cursor.line, 0);
    }

    #[test]
    fn test_column_is_clamped_to_line() {
        let buffer = buffer(2);
        let mut cursor = Cursor::default();
        cursor.move_to(&buffer, 1, 40);
        assert_eq!(cursor, Cursor::new(1, 6));
    }
}
