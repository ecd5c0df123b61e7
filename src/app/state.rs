use crate::config::AppConfig;
use crate::form::{ContactForm, Field};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Editing buffer for one text input. The cursor is a byte offset that
/// always sits on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len());
        self.text.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// The tail of the text to draw in a box `width` columns wide, scrolled
    /// just far enough that the cursor stays inside the box, and the cursor
    /// column relative to that tail.
    pub fn viewport(&self, width: usize) -> (&str, usize) {
        let cursor_width = self.cursor_width();
        let offset = (cursor_width + 1).saturating_sub(width);
        let mut skipped = 0;
        let mut start = self.text.len();
        for (i, c) in self.text.char_indices() {
            if skipped >= offset {
                start = i;
                break;
            }
            skipped += c.width().unwrap_or(0);
        }
        (&self.text[start..], cursor_width.saturating_sub(skipped))
    }
}

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(Field::FirstName),
        Focus::Field(Field::LastName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Message),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn name(self) -> &'static str {
        match self {
            Focus::Field(f) => f.label().trim_end_matches('*'),
            Focus::Submit => "Submit",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: ContactForm,
    pub inputs: [InputState; 4],
    pub focus: Focus,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            form: ContactForm::new(),
            inputs: Default::default(),
            focus: Focus::Field(Field::FirstName),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn input(&self, field: Field) -> &InputState {
        &self.inputs[field.index()]
    }

    /// Apply `edit` to the input of `field`; if it reports a change, the new
    /// text is handed to the form for validation.
    pub fn edit_field(&mut self, field: Field, edit: impl FnOnce(&mut InputState) -> bool) {
        let input = &mut self.inputs[field.index()];
        if edit(input) {
            self.form.on_field_change(field, input.text.clone());
            self.dirty = true;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let mut s = match self.form.errors().len() {
            0 => "No errors".to_string(),
            1 => "1 error".to_string(),
            n => format!("{} errors", n),
        };
        if self.form.is_submitted() {
            s.push_str(" | submitted");
        }
        s
    }
}
