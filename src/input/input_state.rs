use ratatui::crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

/// Longest accepted key: an 8-digit date
pub const MAX_INPUT_LEN: usize = 8;

/// Single-line, length-bounded date input
///
/// The textarea is only the editing engine; the app draws the value itself.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(initial: &str) -> Self {
        let initial: String = initial.chars().take(MAX_INPUT_LEN).collect();
        let mut textarea = TextArea::new(vec![initial]);
        textarea.move_cursor(CursorMove::End);

        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Cursor column within the single line
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Apply an editing key
    ///
    /// Edits that would add a second line or push the value past
    /// [`MAX_INPUT_LEN`] are rolled back. Returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.value().to_string();
        let (row, col) = self.textarea.cursor();

        if !self.textarea.input(key) {
            return false;
        }

        let lines = self.textarea.lines();
        let within_bounds = lines.len() == 1 && lines[0].chars().count() <= MAX_INPUT_LEN;
        if within_bounds {
            return self.value() != before;
        }

        self.textarea = TextArea::new(vec![before]);
        self.textarea.move_cursor(CursorMove::Jump(row as u16, col as u16));
        false
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
