//! Character classes shared by the token colorizers.

/// CJK unified ideographs, the range identifiers may be written in.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// A character that can appear inside an identifier.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_cjk(c)
}

/// Neighbours that stop a digit run from being a number literal.
pub fn blocks_number(c: char) -> bool {
    is_name_char(c) || matches!(c, '#' | '"' | '“' | '’')
}

/// Neighbours that stop `#name` from being a constant.
pub fn blocks_constant(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_cjk(c) || matches!(c, '#' | '"' | '\'' | '“' | '‘' | '’')
}

/// The character ending just before byte offset `at`.
pub fn char_before(s: &str, at: usize) -> Option<char> {
    s[..at].chars().next_back()
}

/// The character starting at byte offset `at`.
pub fn char_at(s: &str, at: usize) -> Option<char> {
    s[at..].chars().next()
}
