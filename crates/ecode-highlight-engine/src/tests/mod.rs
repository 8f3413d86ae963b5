//! Shared helpers for unit tests: markup stripping and in-memory surfaces.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    highlight::Rendered,
    sync::{EditSurface, RenderSurface, ScrollPosition, Surface},
};

/// Removes tags and decodes entities, leaving the text a reader would see.
pub fn strip_markup(markup: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));
    let text = tag.replace_all(markup, "");
    html_escape::decode_html_entities(&text).into_owned()
}

#[derive(Debug, Default)]
pub struct FakeEditor {
    pub text: String,
    pub caret: usize,
    pub scroll: ScrollPosition,
    pub visible: bool,
    pub focus_count: usize,
}

impl FakeEditor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

impl Surface for FakeEditor {
    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll.offset = offset;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl EditSurface for FakeEditor {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }
}

#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub last: Option<Rendered>,
    pub presents: usize,
    pub caret: Option<usize>,
    pub scroll: ScrollPosition,
    pub visible: bool,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible text of the last presented markup.
    pub fn text(&self) -> String {
        self.last
            .as_ref()
            .map(|r| strip_markup(r.markup()))
            .unwrap_or_default()
    }
}

impl Surface for FakeRenderer {
    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll.offset = offset;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl RenderSurface for FakeRenderer {
    fn present(&mut self, rendered: &Rendered) {
        self.last = Some(rendered.clone());
        self.presents += 1;
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }
}

#[test]
fn strip_markup_decodes_entities() {
    assert_eq!(
        strip_markup("<div><span style='color:#fff'>a &amp; &#x27;b&#x27;</span>\n</div>"),
        "a & 'b'\n"
    );
}
