//! Cursor editing for the single-line search input.
//!
//! The text itself lives in the session; this only tracks a byte offset that
//! always sits on a char boundary.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCursor {
    pos: usize,
}

impl LineCursor {
    /// Cursor placed after the last character of `text`.
    pub fn at_end(text: &str) -> Self {
        Self { pos: text.len() }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Column of the cursor, counted in chars.
    pub fn column(&self, text: &str) -> usize {
        text[..self.pos.min(text.len())].chars().count()
    }

    pub fn insert(&mut self, text: &mut String, c: char) {
        self.clamp(text);
        text.insert(self.pos, c);
        self.pos += c.len_utf8();
    }

    /// Delete the char before the cursor. Returns `false` at the start.
    pub fn backspace(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        match prev_boundary(text, self.pos) {
            Some(prev) => {
                text.remove(prev);
                self.pos = prev;
                true
            }
            None => false,
        }
    }

    /// Delete the char under the cursor. Returns `false` at the end.
    pub fn delete(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.pos < text.len() {
            text.remove(self.pos);
            true
        } else {
            false
        }
    }

    pub fn left(&mut self, text: &str) {
        self.clamp(text);
        if let Some(prev) = prev_boundary(text, self.pos) {
            self.pos = prev;
        }
    }

    pub fn right(&mut self, text: &str) {
        self.clamp(text);
        if let Some(c) = text[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.pos = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.pos = text.len();
    }

    // The text can change under us (e.g. replaced by the session).
    fn clamp(&mut self, text: &str) {
        if self.pos > text.len() {
            self.pos = text.len();
        }
        while !text.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }
}

fn prev_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().last().map(|(i, _)| i)
}
