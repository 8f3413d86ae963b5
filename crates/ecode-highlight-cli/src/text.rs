//! Caret arithmetic over plain text. Carets are character indices.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of character `caret`, or the text length past the end.
pub fn byte_offset(text: &str, caret: usize) -> usize {
    text.char_indices().nth(caret).map_or(text.len(), |(b, _)| b)
}

/// Number of `\n`-separated lines; a trailing newline opens an empty last line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Zero-based line and column of `caret`.
pub fn line_col(text: &str, caret: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for c in text.chars().take(caret) {
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Caret at `line`, `col`, clamped to the text.
pub fn caret_for(text: &str, line: usize, col: usize) -> usize {
    let mut caret = 0;
    let mut lines = text.split('\n').peekable();
    let mut i = 0;
    while let Some(l) = lines.next() {
        let len = char_count(l);
        if i == line || lines.peek().is_none() {
            return caret + col.min(len);
        }
        caret += len + 1;
        i += 1;
    }
    caret
}

pub fn nth_line(text: &str, line: usize) -> &str {
    text.split('\n').nth(line).unwrap_or_default()
}

pub fn apply_motion(text: &str, caret: usize, motion: Motion) -> usize {
    let caret = caret.min(char_count(text));
    let (line, col) = line_col(text, caret);
    match motion {
        Motion::Left => caret.saturating_sub(1),
        Motion::Right => (caret + 1).min(char_count(text)),
        Motion::Up if line == 0 => 0,
        Motion::Up => caret_for(text, line - 1, col),
        Motion::Down if line + 1 >= line_count(text) => char_count(text),
        Motion::Down => caret_for(text, line + 1, col),
        Motion::Home => caret - col,
        Motion::End => caret_for(text, line, usize::MAX),
    }
}

/// Terminal columns taken by the first `col` characters of `line`.
pub fn display_column(line: &str, col: usize) -> usize {
    let end = byte_offset(line, col);
    line[..end].width()
}

/// Screen row of `line` in a pane showing `viewport` rows from `top`.
pub fn viewport_row(line: usize, top: usize, viewport: usize) -> Option<usize> {
    line.checked_sub(top).filter(|row| *row < viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "ab\n变量值\n\nxyz";

    #[test]
    fn line_col_counts_characters() {
        assert_eq!(line_col(TEXT, 0), (0, 0));
        assert_eq!(line_col(TEXT, 2), (0, 2));
        assert_eq!(line_col(TEXT, 3), (1, 0));
        assert_eq!(line_col(TEXT, 5), (1, 2));
        assert_eq!(line_col(TEXT, 7), (2, 0));
        assert_eq!(line_col(TEXT, 11), (3, 3));
    }

    #[test]
    fn caret_for_clamps_column_and_line() {
        assert_eq!(caret_for(TEXT, 1, 1), 4);
        assert_eq!(caret_for(TEXT, 1, 99), 6);
        assert_eq!(caret_for(TEXT, 2, 5), 7);
        assert_eq!(caret_for(TEXT, 9, 1), 9);
    }

    #[test]
    fn motions_stay_in_bounds() {
        assert_eq!(apply_motion(TEXT, 0, Motion::Left), 0);
        assert_eq!(apply_motion(TEXT, 11, Motion::Right), 11);
        assert_eq!(apply_motion(TEXT, 1, Motion::Up), 0);
        assert_eq!(apply_motion(TEXT, 9, Motion::Down), 11);
    }

    #[test]
    fn vertical_motion_keeps_column_where_possible() {
        // From column 2 of "ab" down to column 2 of "变量值", then down onto the empty line.
        let down = apply_motion(TEXT, 2, Motion::Down);
        assert_eq!(down, 5);
        assert_eq!(apply_motion(TEXT, down, Motion::Down), 7);
        assert_eq!(apply_motion(TEXT, 10, Motion::Up), 7);
    }

    #[test]
    fn home_and_end() {
        assert_eq!(apply_motion(TEXT, 5, Motion::Home), 3);
        assert_eq!(apply_motion(TEXT, 4, Motion::End), 6);
    }

    #[test]
    fn wide_characters_take_two_columns() {
        assert_eq!(display_column("变量 = 1", 2), 4);
        assert_eq!(display_column("ab", 5), 2);
        assert_eq!(byte_offset("变量", 1), 3);
        assert_eq!(nth_line(TEXT, 1), "变量值");
        assert_eq!(line_count("a\n"), 2);
    }

    #[test]
    fn rows_outside_the_viewport_have_no_screen_row() {
        assert_eq!(viewport_row(3, 2, 4), Some(1));
        assert_eq!(viewport_row(5, 2, 4), Some(3));
        assert_eq!(viewport_row(6, 2, 4), None);
        assert_eq!(viewport_row(1, 2, 4), None);
    }
}
