//! Column-aware text helpers.
//!
//! Everything here measures in terminal columns (`unicode-width`), not bytes
//! or chars, so wide glyphs line up in the page layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than a line are truncated rather than split. Always returns at
/// least one line (empty input gives one empty line).
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate_with_ellipsis(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    lines.push(current);
    lines
}

/// Right-pads `text` with spaces to exactly `width` columns (truncating if
/// it is wider).
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_with_ellipsis(text, width);
    let fill = width.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Left padding that centers `text_width` columns inside `width`.
pub fn center_offset(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("folio", 5), "folio");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Reliable Backend", 8), "Reliabl…");
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_glyphs() {
        // Each CJK glyph is two columns wide.
        assert_eq!(truncate_with_ellipsis("中文字", 5), "中文…");
        assert_eq!(truncate_with_ellipsis("中文字", 4), "中…");
    }

    #[test]
    fn test_wrap_words_breaks_on_width() {
        let lines = wrap_words("I design and build fast web apps", 12);
        assert_eq!(lines, vec!["I design and", "build fast", "web apps"]);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_wrap_words_empty_input() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_words_long_word_truncated() {
        assert_eq!(wrap_words("supercalifragilistic", 6), vec!["super…"]);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
        assert_eq!(pad_to_width("中", 3).width(), 3);
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(12, 10), 0);
    }
}
