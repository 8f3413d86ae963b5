use super::styled::StyledLine;

/// What a rendered line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Outside any fenced block.
    Prose,
    /// An opening or closing fence line.
    Fence,
    /// A colorized code line with its indentation guide count.
    Code { guides: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    /// Line text without its newline, with spans for code lines.
    pub line: StyledLine,
    pub newline: bool,
}

/// A colorized document: per-line structure plus the serialized markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    lines: Vec<RenderedLine>,
    markup: String,
}

impl Rendered {
    pub(crate) fn new(lines: Vec<RenderedLine>, markup: String) -> Self {
        Self { lines, markup }
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }

    /// The rendered text with markup stripped. Equal to the source document.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.markup.len());
        for l in &self.lines {
            out.push_str(l.line.text());
            if l.newline {
                out.push('\n');
            }
        }
        out
    }
}
