//! Markup serialization of rendered lines.

use crate::escape::push_escaped;

use super::{
    guides::push_guides,
    palette::Palette,
    rendered::{LineKind, RenderedLine},
    styled::StyledLine,
};

const LINE_OPEN: &str = r#"<div style="position:relative">"#;
const LINE_CLOSE: &str = "</div>";

/// Appends a line's segments, wrapping each colorized one in a colour span.
pub fn push_styled(out: &mut String, line: &StyledLine, palette: &Palette) {
    for segment in line.segments() {
        match segment.category {
            Some(category) => {
                out.push_str("<span style='color:");
                out.push_str(palette.color(category));
                out.push_str("'>");
                push_escaped(out, segment.text);
                out.push_str("</span>");
            }
            None => push_escaped(out, segment.text),
        }
    }
}

/// Appends one rendered line.
///
/// Prose and fence lines are emitted escaped and unwrapped. Code lines get a
/// positioned wrapper holding their guides; the newline stays inside it.
pub fn push_line(out: &mut String, line: &RenderedLine, palette: &Palette) {
    match line.kind {
        LineKind::Prose | LineKind::Fence => {
            push_escaped(out, line.line.text());
            if line.newline {
                out.push('\n');
            }
        }
        LineKind::Code { guides } => {
            out.push_str(LINE_OPEN);
            push_guides(out, guides);
            push_styled(out, &line.line, palette);
            if line.newline {
                out.push('\n');
            }
            out.push_str(LINE_CLOSE);
        }
    }
}

pub fn to_markup(lines: &[RenderedLine], palette: &Palette) -> String {
    let mut out = String::new();
    for line in lines {
        push_line(&mut out, line, palette);
    }
    out
}
