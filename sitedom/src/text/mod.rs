//! Text measurement for the flow layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in display columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Number of lines `s` occupies when word-wrapped to `max_width` columns.
///
/// Words wider than a line are broken between characters. Each `\n` starts
/// a new line, and a blank line still takes one. Text with nothing but
/// whitespace takes no lines at all.
pub fn line_count(s: &str, max_width: usize) -> usize {
    if s.trim().is_empty() {
        return 0;
    }
    let max_width = max_width.max(1);
    s.split('\n')
        .map(|paragraph| paragraph_lines(paragraph, max_width))
        .sum()
}

fn paragraph_lines(paragraph: &str, max_width: usize) -> usize {
    let mut finished = 0;
    // Width of the line being filled, None before the first word
    let mut open: Option<usize> = None;

    for word in paragraph.split_whitespace() {
        let width = display_width(word);
        if width > max_width {
            if open.is_some() {
                finished += 1;
            }
            let (full, tail) = broken_word(word, max_width);
            finished += full;
            open = Some(tail);
            continue;
        }
        open = match open {
            Some(used) if used + 1 + width <= max_width => Some(used + 1 + width),
            Some(_) => {
                finished += 1;
                Some(width)
            }
            None => Some(width),
        };
    }

    // The open line, or the single empty line of a blank paragraph
    finished + 1
}

/// Lines filled completely when `word` is broken at `max_width` columns,
/// and the width left on the last one.
fn broken_word(word: &str, max_width: usize) -> (usize, usize) {
    let mut full = 0;
    let mut used = 0;
    for ch in word.chars() {
        let width = ch.width().unwrap_or(0);
        if width == 0 {
            continue;
        }
        if used > 0 && used + width > max_width {
            full += 1;
            used = 0;
        }
        used += width;
    }
    (full, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_word() {
        assert_eq!(broken_word("abcdefghij", 4), (2, 2));
        assert_eq!(broken_word("abcd", 4), (0, 4));
        assert_eq!(broken_word("日本語", 3), (2, 2));
    }
}
