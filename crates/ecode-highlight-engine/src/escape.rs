use std::borrow::Cow;

/// Escapes the five markup-significant characters (`&`, `<`, `>`, `"`, `'`).
///
/// Every piece of document text that reaches the markup goes through here,
/// which is what keeps span wrappers the only structural markup in the output.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Appends the escaped form of `text` to `out`.
pub fn push_escaped(out: &mut String, text: &str) {
    out.push_str(&escape_html(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("变量 = 100"), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("a & b", "a &amp; b")]
    #[case("<div>", "&lt;div&gt;")]
    #[case("\"x\"", "&quot;x&quot;")]
    #[case("'x'", "&#x27;x&#x27;")]
    fn escapes_reserved_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[test]
    fn single_quote_is_escaped_and_decodes_back() {
        let escaped = escape_html("a 'remark'");
        assert!(!escaped.contains('\''));
        assert_eq!(html_escape::decode_html_entities(&escaped), "a 'remark'");
    }

    #[test]
    fn no_reserved_character_survives() {
        let escaped = escape_html("<&>\"'");
        for c in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(c), "raw {c:?} in {escaped}");
        }
        assert_eq!(escaped.matches('&').count(), 5);
    }
}
