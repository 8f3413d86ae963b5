use ecode_highlight_engine::{EditSurface, ScrollPosition, Surface};

use crate::text::{self, Motion};

/// Plain-text editing pane. Scrolls by whole lines.
#[derive(Debug, Default)]
pub struct TuiEditor {
    text: String,
    caret: usize,
    top: usize,
    viewport: usize,
    visible: bool,
    focused: bool,
}

impl TuiEditor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            viewport: 1,
            ..Self::default()
        }
    }

    /// Screen row of `line`, when it is inside the viewport.
    pub fn row_of(&self, line: usize) -> Option<usize> {
        text::viewport_row(line, self.top, self.viewport)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Sets the number of visible rows.
    pub fn resize(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.scroll_to_caret();
    }

    /// Caret line and column.
    pub fn caret_position(&self) -> (usize, usize) {
        text::line_col(&self.text, self.caret)
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').skip(self.top).take(self.viewport)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = text::byte_offset(&self.text, self.caret);
        self.text.insert(at, c);
        self.caret += 1;
        self.scroll_to_caret();
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = text::byte_offset(&self.text, self.caret);
        self.text.insert_str(at, s);
        self.caret += text::char_count(s);
        self.scroll_to_caret();
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        self.remove_at_caret();
    }

    pub fn delete(&mut self) {
        if self.caret < text::char_count(&self.text) {
            self.remove_at_caret();
        }
    }

    pub fn move_caret(&mut self, motion: Motion) {
        self.caret = text::apply_motion(&self.text, self.caret, motion);
        self.scroll_to_caret();
    }

    pub fn page(&mut self, down: bool) {
        let (line, col) = self.caret_position();
        let line = if down {
            line + self.viewport
        } else {
            line.saturating_sub(self.viewport)
        };
        self.caret = text::caret_for(&self.text, line, col);
        self.scroll_to_caret();
    }

    fn remove_at_caret(&mut self) {
        let at = text::byte_offset(&self.text, self.caret);
        self.text.remove(at);
        self.scroll_to_caret();
    }

    fn scroll_to_caret(&mut self) {
        let (line, _) = self.caret_position();
        if line < self.top {
            self.top = line;
        } else if line >= self.top + self.viewport {
            self.top = line + 1 - self.viewport;
        }
    }

    fn max_top(&self) -> usize {
        text::line_count(&self.text).saturating_sub(self.viewport)
    }
}

impl Surface for TuiEditor {
    fn scroll_position(&self) -> ScrollPosition {
        ScrollPosition::new(
            self.top as f64,
            text::line_count(&self.text) as f64,
            self.viewport as f64,
        )
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.top = (offset.round() as usize).min(self.max_top());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.focused = false;
        }
    }
}

impl EditSurface for TuiEditor {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(text::char_count(text));
        self.top = self.top.min(self.max_top());
    }

    fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret without scrolling, so a restored scroll offset stays put.
    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(text::char_count(&self.text));
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
