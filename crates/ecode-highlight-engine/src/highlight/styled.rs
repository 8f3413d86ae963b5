use std::ops::Range;

use crate::parsing::rope::span::Span;

use super::category::Category;

/// A categorized byte range of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpan {
    pub span: Span,
    pub category: Category,
}

/// A piece of a line as it will be rendered: either raw or wrapped in a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub category: Option<Category>,
}

/// One line of source text and the colorized spans claimed on it so far.
///
/// # Invariants
///
/// - spans are sorted by start and never overlap
/// - every span lies on `char` boundaries inside `text`
///
/// Each colorizer pass only looks at [`gaps`](Self::gaps), the byte ranges no
/// earlier pass has claimed, so pipeline order decides who wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    text: String,
    spans: Vec<ColorSpan>,
}

impl StyledLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: vec![],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[ColorSpan] {
        &self.spans
    }

    /// Texts of the spans of `category`, in line order.
    pub fn texts_of(&self, category: Category) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|s| s.category == category)
            .map(|s| &self.text[s.span.range()])
            .collect()
    }

    /// Byte ranges not covered by any span, in order. Empty ranges are skipped.
    pub fn gaps(&self) -> Vec<Span> {
        let mut gaps = Vec::with_capacity(self.spans.len() + 1);
        let mut cursor = 0;
        for s in &self.spans {
            if s.span.start > cursor {
                gaps.push(Span::new(cursor, s.span.start));
            }
            cursor = s.span.end;
        }
        if cursor < self.text.len() {
            gaps.push(Span::new(cursor, self.text.len()));
        }
        gaps
    }

    /// Claims `span` for `category` if it is non-empty, in bounds, on char
    /// boundaries and entirely unclaimed. Returns whether the claim was made.
    pub fn claim(&mut self, span: Span, category: Category) -> bool {
        if !self.is_valid(span) || self.spans.iter().any(|s| s.span.overlaps(span)) {
            return false;
        }
        let at = self.spans.partition_point(|s| s.span.start < span.start);
        self.spans.insert(at, ColorSpan { span, category });
        true
    }

    /// Claims `span` for `category`, discarding whatever overlaps it.
    ///
    /// Spans straddling an edge of `span` keep the part outside it.
    pub fn overwrite(&mut self, span: Span, category: Category) {
        if !self.is_valid(span) {
            return;
        }

        let mut kept = Vec::with_capacity(self.spans.len() + 2);
        for s in self.spans.drain(..) {
            if !s.span.overlaps(span) {
                kept.push(s);
                continue;
            }
            if s.span.start < span.start {
                kept.push(ColorSpan {
                    span: Span::new(s.span.start, span.start),
                    category: s.category,
                });
            }
            if s.span.end > span.end {
                kept.push(ColorSpan {
                    span: Span::new(span.end, s.span.end),
                    category: s.category,
                });
            }
        }
        kept.push(ColorSpan { span, category });
        kept.sort_by_key(|s| s.span.start);
        self.spans = kept;
    }

    /// Drops every span for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&ColorSpan) -> bool) {
        self.spans.retain(keep);
    }

    /// Runs `find` over every gap and claims what it reports.
    ///
    /// `find` receives the gap's text and returns ranges relative to it; the
    /// gap is all it can see, so look-behind/look-ahead checks stop at the
    /// edges of already claimed spans.
    pub fn colorize_gaps<F>(&mut self, category: Category, find: F)
    where
        F: Fn(&str) -> Vec<Range<usize>>,
    {
        let mut found = vec![];
        for gap in self.gaps() {
            let segment = &self.text[gap.range()];
            found.extend(
                find(segment)
                    .into_iter()
                    .map(|r| Span::from(r).offset(gap.start)),
            );
        }
        for span in found {
            self.claim(span, category);
        }
    }

    /// The line split into raw and colorized segments, covering all of `text`.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut cursor = 0;
        for s in &self.spans {
            if s.span.start > cursor {
                out.push(Segment {
                    text: &self.text[cursor..s.span.start],
                    category: None,
                });
            }
            out.push(Segment {
                text: &self.text[s.span.range()],
                category: Some(s.category),
            });
            cursor = s.span.end;
        }
        if cursor < self.text.len() {
            out.push(Segment {
                text: &self.text[cursor..],
                category: None,
            });
        }
        out
    }

    fn is_valid(&self, span: Span) -> bool {
        !span.is_empty()
            && span.end <= self.text.len()
            && self.text.is_char_boundary(span.start)
            && self.text.is_char_boundary(span.end)
    }
}
