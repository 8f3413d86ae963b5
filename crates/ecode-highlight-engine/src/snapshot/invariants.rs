use std::sync::OnceLock;

use regex::Regex;

use crate::highlight::Rendered;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Panics unless `rendered` is a faithful render of `document`.
pub fn check(document: &str, rendered: &Rendered) {
    for (i, l) in rendered.lines().iter().enumerate() {
        let text = l.line.text();
        let mut end = 0;
        for s in l.line.spans() {
            assert!(
                s.span.start >= end && s.span.start < s.span.end,
                "line {i}: span {:?} overlaps or is empty (previous end {end})",
                s.span
            );
            assert!(
                s.span.end <= text.len()
                    && text.is_char_boundary(s.span.start)
                    && text.is_char_boundary(s.span.end),
                "line {i}: span {:?} outside {text:?}",
                s.span
            );
            end = s.span.end;
        }
    }

    assert_eq!(rendered.text(), document, "rendered text differs from document");

    let visible = tag_regex().replace_all(rendered.markup(), "");
    for c in ['<', '>', '"', '\''] {
        assert!(
            !visible.contains(c),
            "unescaped {c:?} outside tags in markup"
        );
    }
    assert_eq!(
        html_escape::decode_html_entities(&visible),
        document,
        "stripped markup differs from document"
    );
}
