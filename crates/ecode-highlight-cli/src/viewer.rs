use ecode_highlight_engine::{
    LineKind, Palette, RenderSurface, Rendered, RenderedLine, ScrollPosition, Surface,
    highlight::guides::INDENT_UNIT,
};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::text::{self, Motion};

const GUIDE: char = '│';

/// Read-only colorized pane.
///
/// Draws the same spans as the HTML markup, using the palette colours. The
/// caret is `None` until the user moves it, like a selection that was never
/// placed.
#[derive(Debug)]
pub struct TuiViewer {
    lines: Vec<RenderedLine>,
    text: String,
    palette: Palette,
    caret: Option<usize>,
    top: usize,
    viewport: usize,
    visible: bool,
}

impl TuiViewer {
    pub fn new(palette: Palette) -> Self {
        Self {
            lines: vec![],
            text: String::new(),
            palette,
            caret: None,
            top: 0,
            viewport: 1,
            visible: false,
        }
    }

    /// Screen row of `line`, when it is inside the viewport.
    pub fn row_of(&self, line: usize) -> Option<usize> {
        text::viewport_row(line, self.top, self.viewport)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn resize(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.top = self.top.min(self.max_top());
    }

    /// Caret line and column, when placed.
    pub fn caret_position(&self) -> Option<(usize, usize)> {
        self.caret.map(|c| text::line_col(&self.text, c))
    }

    pub fn line_text(&self, line: usize) -> &str {
        text::nth_line(&self.text, line)
    }

    /// Moves the caret, placing it at the top visible line first if absent.
    pub fn move_caret(&mut self, motion: Motion) {
        let caret = match self.caret {
            Some(caret) => text::apply_motion(&self.text, caret, motion),
            None => text::caret_for(&self.text, self.top, 0),
        };
        self.caret = Some(caret);

        let (line, _) = text::line_col(&self.text, caret);
        if line < self.top {
            self.top = line;
        } else if line >= self.top + self.viewport {
            self.top = line + 1 - self.viewport;
        }
    }

    pub fn clear_caret(&mut self) {
        self.caret = None;
    }

    pub fn page(&mut self, down: bool) {
        self.top = if down {
            (self.top + self.viewport).min(self.max_top())
        } else {
            self.top.saturating_sub(self.viewport)
        };
    }

    pub fn visible_lines(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(self.top)
            .take(self.viewport)
            .map(|l| styled_line(l, &self.palette))
            .collect()
    }

    fn max_top(&self) -> usize {
        text::line_count(&self.text).saturating_sub(self.viewport)
    }
}

impl Surface for TuiViewer {
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
    }
}

impl RenderSurface for TuiViewer {
    fn present(&mut self, rendered: &Rendered) {
        self.lines = rendered.lines().to_vec();
        self.text = rendered.text();
        self.caret = None;
        self.top = self.top.min(self.max_top());
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }
}

/// Parses a palette colour; names the terminal does not know fall back to the default.
pub fn terminal_color(color: &str) -> Color {
    color.parse().unwrap_or(Color::Reset)
}

/// One rendered line as terminal spans.
///
/// Indentation guides replace the leading whitespace they cover.
pub fn styled_line(line: &RenderedLine, palette: &Palette) -> Line<'static> {
    let text = line.line.text();
    let guides = match line.kind {
        LineKind::Code { guides } => guides,
        LineKind::Prose | LineKind::Fence => 0,
    };

    let mut spans = vec![];
    let gutter = guides * INDENT_UNIT;
    let covered = text
        .chars()
        .take(gutter)
        .take_while(|c| c.is_whitespace())
        .count();
    if gutter > 0 {
        let marks: String = (0..gutter)
            .map(|i| if i % INDENT_UNIT == 0 { GUIDE } else { ' ' })
            .collect();
        spans.push(Span::styled(marks, Style::default().fg(Color::DarkGray)));
    }

    let skip = text::byte_offset(text, covered);
    let mut offset = 0;
    for segment in line.line.segments() {
        let start = offset;
        offset += segment.text.len();
        if offset <= skip {
            continue;
        }
        let visible = &segment.text[skip.saturating_sub(start)..];
        let style = match segment.category {
            Some(category) => Style::default().fg(terminal_color(palette.color(category))),
            None => Style::default(),
        };
        spans.push(Span::styled(visible.to_string(), style));
    }

    Line::from(spans)
}
