use regex::Regex;

use crate::{error::HighlightError, parsing::rope::span::Span};

use super::{category::Category, styled::StyledLine, tokens::NAME_PATTERN};

/// A parsed `.子程序` or `.参数` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    /// The type field; `None` when left empty.
    pub kind: Option<&'a str>,
    pub flags: &'a str,
    /// Byte range of the trailing comment, `None` when it is empty.
    pub comment: Option<Span>,
}

/// `.marker name, type, flags, comment` with `,` or `，` separators.
///
/// The flags field holds no separator, so the comment is everything after the
/// third one and may itself contain separators.
#[derive(Debug, Clone)]
pub struct DeclarationGrammar {
    pattern: Regex,
}

impl DeclarationGrammar {
    pub fn new(marker: &str) -> Result<Self, HighlightError> {
        let marker = regex::escape(marker);
        let pattern = Regex::new(&format!(
            r"^\s*\.{marker}\s+({NAME_PATTERN})\s*[,，]\s*({NAME_PATTERN})?\s*[,，]\s*([^,，]*?)\s*[,，]\s*(.*)$"
        ))?;
        Ok(Self { pattern })
    }

    pub fn subroutine() -> Result<Self, HighlightError> {
        Self::new("子程序")
    }

    pub fn parameter() -> Result<Self, HighlightError> {
        Self::new("参数")
    }

    pub fn parse<'a>(&self, code: &'a str) -> Option<Declaration<'a>> {
        let caps = self.pattern.captures(code)?;
        let name = caps.get(1)?.as_str();
        let kind = caps.get(2).map(|m| m.as_str());
        let flags = caps.get(3).map_or("", |m| m.as_str());

        let comment = caps.get(4).and_then(|m| {
            let text = m.as_str().trim_end();
            (!text.is_empty()).then(|| Span::new(m.start(), m.start() + text.len()))
        });

        Some(Declaration {
            name,
            kind,
            flags,
            comment,
        })
    }

    /// Marks the comment of a declaration in the first `code_len` bytes of
    /// `line` as a remark. Lines that do not parse are left alone.
    pub fn mark_comment(&self, line: &mut StyledLine, code_len: usize) {
        let comment = self
            .parse(&line.text()[..code_len])
            .and_then(|declaration| declaration.comment);
        if let Some(span) = comment {
            line.overwrite(span, Category::Remark);
        }
    }
}
