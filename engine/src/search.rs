//! Editable search query with a grapheme-based cursor.

use unicode_segmentation::UnicodeSegmentation;

use worldclock_types::sanitize_query;

/// Single-line text buffer backing the search box.
///
/// `cursor` counts grapheme clusters, not bytes or chars, so moving across
/// "São" or an emoji never lands inside a cluster.
#[derive(Debug, Default, Clone)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Buffer containing `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut input = Self::default();
        input.enter_text(text);
        input
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor; the renderer measures it to place the caret.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index()]
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn enter_char(&mut self, new_char: char) {
        if new_char.is_control() {
            return;
        }
        let mut buf = [0; 4];
        self.insert_at_cursor(new_char.encode_utf8(&mut buf));
    }

    /// Insert pasted text at the cursor, dropping control characters.
    pub fn enter_text(&mut self, text: &str) {
        let clean = sanitize_query(text);
        if clean.is_empty() {
            return;
        }
        self.insert_at_cursor(&clean);
    }

    /// Combining marks can join the grapheme before the cursor, so the cursor
    /// advances by the change in cluster count rather than by what was typed.
    fn insert_at_cursor(&mut self, text: &str) {
        let before = self.grapheme_count();
        let index = self.byte_index();
        self.text.insert_str(index, text);
        let added = self.grapheme_count().saturating_sub(before);
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(added));
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_delete_respect_graphemes() {
        let mut input = SearchInput::with_text("a🦀b");
        input.move_cursor_home();
        input.move_cursor_right();
        input.enter_char('X');
        assert_eq!(input.text(), "aX🦀b");
        assert_eq!(input.cursor(), 2);

        input.delete_char_forward();
        assert_eq!(input.text(), "aXb");
        input.delete_char();
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn combining_sequence_is_one_grapheme() {
        // "a" + COMBINING TILDE renders as one cluster.
        let mut input = SearchInput::with_text("sa\u{303}o");
        assert_eq!(input.cursor(), 3);
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.text(), "so");
    }

    #[test]
    fn combining_mark_joins_previous_cluster_mid_text() {
        let mut input = SearchInput::with_text("ab");
        input.move_cursor_home();
        input.move_cursor_right();
        input.enter_char('\u{301}');
        assert_eq!(input.cursor(), 1);
        input.enter_char('x');
        assert_eq!(input.text(), "a\u{301}xb");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn pasted_combining_mark_does_not_overshoot() {
        let mut input = SearchInput::with_text("ab");
        input.move_cursor_home();
        input.move_cursor_right();
        input.enter_text("\u{301}x");
        assert_eq!(input.text(), "a\u{301}xb");
        assert_eq!(input.text_before_cursor(), "a\u{301}x");
    }

    #[test]
    fn cursor_is_clamped_at_both_ends() {
        let mut input = SearchInput::with_text("ab");
        input.move_cursor_right();
        assert_eq!(input.cursor(), 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor(), 0);
        input.delete_char();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn paste_strips_control_characters() {
        let mut input = SearchInput::default();
        input.enter_text("new\nyork\x1b[0m");
        assert_eq!(input.text(), "newyork");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn paste_in_the_middle() {
        let mut input = SearchInput::with_text("Nrk");
        input.move_cursor_home();
        input.move_cursor_right();
        input.enter_text("ew Yo");
        assert_eq!(input.text(), "New York");
        assert_eq!(input.text_before_cursor(), "New Yo");
    }

    #[test]
    fn delete_word_backwards_eats_trailing_space_then_word() {
        let mut input = SearchInput::with_text("south korea  ");
        input.delete_word_backwards();
        assert_eq!(input.text(), "south ");
        input.delete_word_backwards();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn control_char_is_ignored() {
        let mut input = SearchInput::default();
        input.enter_char('\t');
        assert_eq!(input.text(), "");
    }
}
