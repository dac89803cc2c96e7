//! UTF-8 safe single-line text buffer with cursor management.
//!
//! Extracted so the combobox input stays focused on suggestion logic while
//! the editing primitives live in one place. The cursor is a byte index
//! that is always kept on a character boundary.

#[derive(Clone, Debug, Default)]
pub(crate) struct TextInputState {
    /// The underlying text buffer.
    value: String,
    /// Cursor byte index into `value`.
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- Selectors -----

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the buffer contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    // ----- Reducers -----

    /// Empties the buffer and rewinds the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Move the cursor one Unicode scalar to the left. No-op at the start.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.value[..self.cursor].chars().last() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move the cursor one Unicode scalar to the right. No-op at the end.
    pub fn move_right(&mut self) {
        if let Some(next) = self.value[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character immediately before the cursor. No-op at the
    /// start.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.value[..self.cursor].chars().last() {
            let start = self.cursor - prev.len_utf8();
            self.value.drain(start..self.cursor);
            self.cursor = start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_respect_multibyte_boundaries() {
        let mut st = TextInputState::new();
        for c in "hé".chars() {
            st.insert_char(c);
        }
        st.insert_char('!');
        assert_eq!(st.value(), "hé!");
        st.move_left();
        st.move_left(); // now between 'h' and 'é'
        st.backspace();
        assert_eq!(st.value(), "é!");
        st.move_right();
        st.backspace();
        assert_eq!(st.value(), "!");
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut st = TextInputState::new();
        st.backspace();
        st.move_left();
        st.move_right();
        assert_eq!(st.cursor(), 0);
        st.insert_char('a');
        st.move_right();
        assert_eq!(st.cursor(), 1);
    }

    #[test]
    fn blank_means_whitespace_only() {
        let mut st = TextInputState::new();
        assert!(st.is_blank());
        st.insert_char(' ');
        assert!(st.is_blank());
        st.insert_char('x');
        assert!(!st.is_blank());
        st.clear();
        assert!(st.is_blank());
        assert_eq!(st.cursor(), 0);
    }
}
