use std::ops::Range;

use super::{Colorizer, category::Category};

/// A recognized quote style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair {
    pub open: &'static str,
    pub close: &'static str,
}

/// Finds quoted strings with a single left-to-right scan.
///
/// At most one quote is open at a time. A quote glyph of any style other than
/// the matching close abandons the open quote instead of nesting, and a quote
/// still open at the end of the text produces nothing.
#[derive(Debug, Clone)]
pub struct QuoteScanner {
    pairs: Vec<QuotePair>,
}

impl QuoteScanner {
    pub const NATIVE: QuotePair = QuotePair {
        open: "“",
        close: "”",
    };
    pub const STRAIGHT: QuotePair = QuotePair {
        open: "\"",
        close: "\"",
    };

    pub fn new() -> Self {
        Self {
            pairs: vec![Self::NATIVE, Self::STRAIGHT],
        }
    }

    fn starts_any_glyph(&self, rest: &str) -> bool {
        self.pairs
            .iter()
            .any(|p| rest.starts_with(p.open) || rest.starts_with(p.close))
    }
}

impl Default for QuoteScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Colorizer for QuoteScanner {
    fn category(&self) -> Category {
        Category::String
    }

    fn find(&self, s: &str) -> Vec<Range<usize>> {
        let mut found = vec![];
        let mut open: Option<(usize, QuotePair)> = None;
        let mut i = 0;

        while i < s.len() {
            let rest = &s[i..];
            match open {
                None => {
                    if let Some(pair) = self.pairs.iter().find(|p| rest.starts_with(p.open)) {
                        open = Some((i, *pair));
                        i += pair.open.len();
                        continue;
                    }
                }
                Some((start, pair)) => {
                    if rest.starts_with(pair.close) {
                        found.push(start..i + pair.close.len());
                        open = None;
                        i += pair.close.len();
                        continue;
                    }
                    if self.starts_any_glyph(rest) {
                        open = None;
                    }
                }
            }
            i += rest.chars().next().map_or(1, char::len_utf8);
        }

        found
    }
}
