use crate::parsing::rope::span::Span;

/// A fenced block: opening fence line, content lines, closing fence line.
///
/// All three spans are line-aligned and contiguous: `open.end == content.start`
/// and `content.end == close.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock {
    /// The opening fence line, newline included.
    pub open: Span,
    /// The lines between the fences (may be empty).
    pub content: Span,
    /// The closing fence line, newline included when present.
    pub close: Span,
}

impl FencedBlock {
    /// Full span from the opening fence to the end of the closing fence line.
    pub fn span(&self) -> Span {
        Span::new(self.open.start, self.close.end)
    }
}

/// One element of the document partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Text outside any fenced block. Escaped, never colorized.
    Prose(Span),
    /// A fenced block whose content lines are colorized.
    Fenced(FencedBlock),
}

impl Part {
    pub fn span(&self) -> Span {
        match self {
            Part::Prose(span) => *span,
            Part::Fenced(block) => block.span(),
        }
    }
}
