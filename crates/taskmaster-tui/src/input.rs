#![forbid(unsafe_code)]

//! Single-line text input.
//!
//! A minimal input field with a grapheme-aware cursor. The cursor is a
//! grapheme index, not a byte index, so editing never splits a multi-byte
//! character or a combining sequence.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single-line text input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
}

impl TextInput {
    /// Create a new empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current value with surrounding whitespace trimmed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Whether the input holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position as a grapheme index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width (terminal cells) of the text before the cursor.
    #[must_use]
    pub fn cursor_col(&self) -> u16 {
        let byte = self.byte_offset(self.cursor);
        self.value[..byte].width() as u16
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte = self.byte_offset(self.cursor);
        self.value.insert(byte, c);
        // Recount rather than increment: a combining mark merges into the
        // preceding grapheme instead of forming a new one.
        self.cursor = self.value[..byte + c.len_utf8()].graphemes(true).count();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    /// Move the cursor one grapheme left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (or the string length past the
    /// end).
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn insert_appends_at_cursor() {
        let input = typed("abc");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn insert_mid_string() {
        let mut input = typed("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = typed("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = typed("a");
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = typed("ab");
        input.delete();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn handles_multibyte_graphemes() {
        let mut input = typed("héllo");
        assert_eq!(input.cursor(), 5);
        input.move_home();
        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "éllo");
    }

    #[test]
    fn cursor_col_uses_display_width() {
        // CJK characters occupy two terminal cells each.
        let input = typed("日本");
        assert_eq!(input.cursor_col(), 4);
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let input = typed("  Buy milk  ");
        assert_eq!(input.trimmed(), "Buy milk");
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut input = typed("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
