//! Indentation guides for code lines.

/// Leading whitespace characters per indentation level.
pub const INDENT_UNIT: usize = 4;

/// Indentation depth of a line: leading whitespace characters / [`INDENT_UNIT`].
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() / INDENT_UNIT
}

/// Guide counts for the content lines of one block.
///
/// A blank line takes the deeper of its neighbours' levels so guides run
/// unbroken through empty lines inside nested code.
pub fn guide_levels<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    let raw: Vec<usize> = lines.iter().map(|l| indent_level(l.as_ref())).collect();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if !line.as_ref().trim().is_empty() {
                return raw[i];
            }
            let prev = i.checked_sub(1).map_or(0, |p| raw[p]);
            let next = raw.get(i + 1).copied().unwrap_or(0);
            prev.max(next)
        })
        .collect()
}

/// Horizontal position of guide `index`, in em.
pub fn guide_left(index: usize) -> f64 {
    index as f64 * 2.5 + 0.5
}

/// Appends `count` guide markers.
pub fn push_guides(out: &mut String, count: usize) {
    for i in 0..count {
        out.push_str(&format!(
            r#"<div class="indent-guide" style="left:{}em"></div>"#,
            guide_left(i)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a", 0)]
    #[case("   a", 0)]
    #[case("    a", 1)]
    #[case("\t\t\t\ta", 1)]
    #[case("         a", 2)]
    #[case("　　　　a", 1)]
    fn levels_floor_whitespace_width(#[case] line: &str, #[case] level: usize) {
        assert_eq!(indent_level(line), level);
    }

    #[test]
    fn blank_line_between_level_two_lines_gets_two_guides() {
        let lines = ["        a", "   ", "        b"];
        assert_eq!(guide_levels(&lines), vec![2, 2, 2]);
    }

    #[test]
    fn blank_line_takes_deeper_neighbour() {
        let lines = ["a", "", "        b", "    c", ""];
        assert_eq!(guide_levels(&lines), vec![0, 2, 2, 1, 1]);
    }

    #[test]
    fn positions_use_shortest_decimal_form() {
        let mut out = String::new();
        push_guides(&mut out, 2);
        assert_eq!(
            out,
            r#"<div class="indent-guide" style="left:0.5em"></div><div class="indent-guide" style="left:3em"></div>"#
        );
    }
}
