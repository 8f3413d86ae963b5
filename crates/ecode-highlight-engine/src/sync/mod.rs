//! # View Synchronization
//!
//! Keeps an editable view and a colorized view of the same document in step.
//!
//! Only one view is visible at a time. Switching to the colorized view renders
//! the current document and carries the scroll fraction over; switching back
//! carries the caret and scroll fraction the other way. Rendered text is
//! identical to the document, so a caret offset in one view is valid in the
//! other without translation.

pub mod scroll;
pub mod surface;

pub use scroll::ScrollPosition;
pub use surface::{EditSurface, RenderSurface, Surface};

use crate::highlight::Highlighter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Editing,
    Highlighted,
}

/// Switches between an [`EditSurface`] and a [`RenderSurface`].
///
/// Transitions are idempotent: requesting the current view does nothing and
/// returns `false`.
pub struct ViewSynchronizer<'h, E, R> {
    highlighter: &'h Highlighter,
    edit: E,
    render: R,
    state: ViewState,
}

impl<'h, E: EditSurface, R: RenderSurface> ViewSynchronizer<'h, E, R> {
    /// Starts in [`ViewState::Editing`] with the edit surface shown.
    pub fn new(highlighter: &'h Highlighter, mut edit: E, mut render: R) -> Self {
        edit.set_visible(true);
        render.set_visible(false);
        Self {
            highlighter,
            edit,
            render,
            state: ViewState::Editing,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn document(&self) -> &str {
        self.edit.text()
    }

    pub fn edit(&self) -> &E {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut E {
        &mut self.edit
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Replaces the document and puts the caret at its end.
    ///
    /// Re-renders immediately when the colorized view is showing.
    pub fn load_document(&mut self, text: &str) {
        self.edit.set_text(text);
        self.edit.set_caret(text.chars().count());
        self.recolorize();
    }

    /// Re-renders the document into the colorized view, keeping its scroll
    /// fraction. Does nothing while editing; returns whether it rendered.
    pub fn recolorize(&mut self) -> bool {
        if self.state != ViewState::Highlighted {
            return false;
        }
        let fraction = self.render.scroll_position().fraction();
        self.present();
        let offset = self.render.scroll_position().offset_for(fraction);
        self.render.set_scroll_offset(offset);
        true
    }

    pub fn show_highlighted(&mut self) -> bool {
        if self.state == ViewState::Highlighted {
            return false;
        }

        let fraction = self.edit.scroll_position().fraction();
        self.edit.set_visible(false);
        self.render.set_visible(true);
        self.present();
        let offset = self.render.scroll_position().offset_for(fraction);
        self.render.set_scroll_offset(offset);

        self.state = ViewState::Highlighted;
        log::debug!("switched to highlighted view (scroll fraction {fraction:.3})");
        true
    }

    pub fn show_editing(&mut self) -> bool {
        if self.state == ViewState::Editing {
            return false;
        }

        let caret = self.render.caret();
        let fraction = self.render.scroll_position().fraction();
        self.render.set_visible(false);
        self.edit.set_visible(true);
        self.edit.focus();
        let offset = self.edit.scroll_position().offset_for(fraction);
        self.edit.set_scroll_offset(offset);

        if let Some(caret) = caret {
            let len = self.edit.text().chars().count();
            self.edit.set_caret(caret.min(len));
        }

        self.state = ViewState::Editing;
        log::debug!("switched to editing view (caret {caret:?}, scroll fraction {fraction:.3})");
        true
    }

    /// Switches to whichever view is hidden and returns the new state.
    pub fn toggle(&mut self) -> ViewState {
        match self.state {
            ViewState::Editing => self.show_highlighted(),
            ViewState::Highlighted => self.show_editing(),
        };
        self.state
    }

    fn present(&mut self) {
        let rendered = self.highlighter.render(self.edit.text());
        self.render.present(&rendered);
    }
}
