pub mod error;
pub mod escape;
pub mod highlight;
pub mod io;
pub mod parsing;
pub mod snapshot;
pub mod sync;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::HighlightError;
pub use escape::escape_html;
pub use highlight::{
    Category, Highlighter, KeywordSets, LineKind, PageStyle, Palette, Rendered, RenderedLine,
    StyledLine, standalone_page,
};
pub use io::*;
pub use sync::{EditSurface, RenderSurface, ScrollPosition, Surface, ViewState, ViewSynchronizer};
