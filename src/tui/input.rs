//! Search input state for the TUI
//!
//! Cursor positions are byte offsets into the query, always kept on a char
//! boundary. Editing methods report whether the text changed so the caller
//! knows when to reschedule a fetch.

use unicode_width::UnicodeWidthStr;

pub struct InputState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl InputState {
    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Append a character at the end, moving the cursor there
    pub fn append(&mut self, c: char) {
        self.query.push(c);
        self.cursor_pos = self.query.len();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            let next = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
            self.cursor_pos = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    /// Wipe the query
    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.cursor_pos = 0;
        true
    }

    /// Terminal column of the cursor within the rendered query
    pub fn cursor_column(&self) -> u16 {
        self.query[..self.cursor_pos].width() as u16
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
