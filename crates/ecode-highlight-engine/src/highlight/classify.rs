//! Leading-token classification of a code line.

use crate::parsing::rope::span::Span;

use super::keywords::{CommandKind, KeywordSets};

/// The line-comment marker.
pub const COMMENT_MARKER: char = '\'';

/// A `.command` at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingCommand<'a> {
    pub name: &'a str,
    pub kind: CommandKind,
    /// The `.` plus the command name.
    pub span: Span,
}

/// Byte offset of the comment marker, if the line has one.
pub fn comment_start(line: &str) -> Option<usize> {
    line.find(COMMENT_MARKER)
}

/// Parameter declaration lines get only data-type colouring.
pub fn is_parameter_line(line: &str) -> bool {
    line.trim().starts_with(".参数")
}

/// Leading whitespace in bytes.
pub fn indent_len(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Classifies the first token of `code` when it is a known `.command`.
///
/// The command name is the first whitespace-delimited token after the `.`,
/// cut at the first `(` or `（`.
pub fn leading_command<'a>(code: &'a str, keywords: &KeywordSets) -> Option<LeadingCommand<'a>> {
    let indent = indent_len(code);
    let rest = code[indent..].strip_prefix('.')?;

    let token = rest.split(char::is_whitespace).next().unwrap_or_default();
    let name = match token.find(['(', '（']) {
        Some(at) => &token[..at],
        None => token,
    };
    if name.is_empty() {
        return None;
    }

    let kind = keywords.classify(name)?;
    Some(LeadingCommand {
        name,
        kind,
        span: Span::new(indent, indent + 1 + name.len()),
    })
}
