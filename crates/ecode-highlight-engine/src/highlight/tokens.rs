use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use super::{
    Colorizer,
    category::Category,
    chars::{blocks_constant, blocks_number, char_at, char_before, is_name_char},
    keywords::KeywordSets,
};
use crate::error::HighlightError;

/// Identifier: CJK ideographs, ASCII letters, digits and `_`, not starting with a digit.
pub const NAME_PATTERN: &str = r"[a-zA-Z_\x{4e00}-\x{9fff}][a-zA-Z0-9_\x{4e00}-\x{9fff}]*";

fn digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("Invalid number regex"))
}

fn constant_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"#[\x{4e00}-\x{9fa5}a-zA-Z_][\x{4e00}-\x{9fa5}a-zA-Z0-9_]*")
            .expect("Invalid constant regex")
    })
}

fn call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"({NAME_PATTERN})\s*[（(]")).expect("Invalid call regex")
    })
}

/// Standalone decimal literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberColorizer;

impl Colorizer for NumberColorizer {
    fn category(&self) -> Category {
        Category::Number
    }

    fn find(&self, gap: &str) -> Vec<Range<usize>> {
        digits_regex()
            .find_iter(gap)
            .filter(|m| {
                !char_before(gap, m.start()).is_some_and(blocks_number)
                    && !char_at(gap, m.end()).is_some_and(blocks_number)
            })
            .map(|m| m.range())
            .collect()
    }
}

/// Data-type keywords as whole words, with surrounding space padding.
#[derive(Debug, Clone)]
pub struct DataTypeColorizer {
    /// `None` when the keyword set is empty.
    pattern: Option<Regex>,
}

impl DataTypeColorizer {
    pub fn new(keywords: &KeywordSets) -> Result<Self, HighlightError> {
        let mut words: Vec<&str> = keywords.data_types.iter().map(String::as_str).collect();
        // Longest first so 双精度小数型 is not cut short by 小数型.
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words.dedup();
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"([ \x{{3000}}]*)({alternation})[ \x{{3000}}]*"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

impl Colorizer for DataTypeColorizer {
    fn category(&self) -> Category {
        Category::DataType
    }

    fn find(&self, gap: &str) -> Vec<Range<usize>> {
        let Some(pattern) = &self.pattern else {
            return vec![];
        };
        pattern
            .captures_iter(gap)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let core = caps.get(2)?;
                let glued = char_before(gap, core.start()).is_some_and(is_name_char)
                    || char_at(gap, core.end()).is_some_and(is_name_char);
                (!glued).then(|| whole.range())
            })
            .collect()
    }
}

/// `#name` constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantColorizer;

impl Colorizer for ConstantColorizer {
    fn category(&self) -> Category {
        Category::Constant
    }

    fn find(&self, gap: &str) -> Vec<Range<usize>> {
        constant_regex()
            .find_iter(gap)
            .filter(|m| !char_before(gap, m.start()).is_some_and(blocks_constant))
            .map(|m| m.range())
            .collect()
    }
}

/// Names called with `(` or `（`, excluding block commands written like calls.
#[derive(Debug, Clone)]
pub struct FunctionColorizer {
    keywords: KeywordSets,
}

impl FunctionColorizer {
    pub fn new(keywords: &KeywordSets) -> Self {
        Self {
            keywords: keywords.clone(),
        }
    }
}

impl Colorizer for FunctionColorizer {
    fn category(&self) -> Category {
        Category::Function
    }

    fn find(&self, gap: &str) -> Vec<Range<usize>> {
        call_regex()
            .captures_iter(gap)
            .filter_map(|caps| {
                // The match ends at the opening bracket, so it never holds a closed pair.
                let name = caps.get(1)?;

                // Glued to a preceding digit: the identifier would start with one.
                if char_before(gap, name.start()).is_some_and(is_name_char) {
                    return None;
                }
                if self.keywords.is_parenthesized_command(name.as_str()) {
                    return None;
                }
                Some(name.range())
            })
            .collect()
    }
}
