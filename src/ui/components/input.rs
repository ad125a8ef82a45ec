//! Single line text input with a character based cursor.

/// Editable text with a cursor measured in characters, not bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content. The cursor stays in place when possible.
    pub fn set_value(&mut self, value: &str) {
        if self.value == value {
            return;
        }
        self.value = value.to_string();
        self.cursor = self.cursor.min(self.char_count());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor - 1);
        self.value.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor);
        self.value.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Split around the cursor for rendering: (before, under, after)
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let byte_pos = self.byte_pos(self.cursor);
        let (before, rest) = self.value.split_at(byte_pos);
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => (before, Some(c), chars.as_str()),
            None => (before, None, ""),
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
