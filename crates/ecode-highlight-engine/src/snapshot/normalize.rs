use std::fmt::Write;

use crate::highlight::{LineKind, Rendered};

/// Describes a render one line per item:
///
/// ```text
/// fence "```e"
/// code[1] "    a = 1"
///   number "1"
/// ```
///
/// Texts use `Debug` quoting; a line without a trailing newline is marked `$`.
pub fn describe(rendered: &Rendered) -> String {
    let mut out = String::new();
    for l in rendered.lines() {
        let kind = match l.kind {
            LineKind::Prose => "prose".to_string(),
            LineKind::Fence => "fence".to_string(),
            LineKind::Code { guides } => format!("code[{guides}]"),
        };
        let end = if l.newline { "" } else { " $" };
        let _ = writeln!(out, "{kind} {:?}{end}", l.line.text());

        for span in l.line.spans() {
            let _ = writeln!(
                out,
                "  {} {:?}",
                span.category,
                &l.line.text()[span.span.range()]
            );
        }
    }
    out
}
