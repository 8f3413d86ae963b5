use crate::highlight::Rendered;

use super::scroll::ScrollPosition;

/// What both views share: scrolling and visibility.
pub trait Surface {
    fn scroll_position(&self) -> ScrollPosition;
    fn set_scroll_offset(&mut self, offset: f64);
    fn set_visible(&mut self, visible: bool);
}

/// The editable plain-text view. It owns the document.
pub trait EditSurface: Surface {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
    /// Caret as a character index into [`text`](Self::text).
    fn caret(&self) -> usize;
    fn set_caret(&mut self, caret: usize);
    fn focus(&mut self);
}

/// The read-only colorized view.
pub trait RenderSurface: Surface {
    /// Replaces the displayed content.
    fn present(&mut self, rendered: &Rendered);
    /// Characters of rendered text before the selection focus, `None` when the
    /// selection is outside this surface.
    fn caret(&self) -> Option<usize>;
}
