//! Width-aware text helpers for rendering labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` display columns, appending `…` when
/// anything was cut. Wide characters are never split in half: if only one
/// column remains and the next character is two columns wide, it is dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1; // reserve a column for the ellipsis
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("Apple", 10), "Apple");
        assert_eq!(truncate_to_width("Apple", 5), "Apple");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate_to_width("Avocado", 5), "Avoc…");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_to_width("Apple", 0), "");
    }

    #[test]
    fn wide_chars_are_not_split() {
        // Each ideograph is two columns; budget of 4 leaves room for one
        // ideograph plus the ellipsis.
        assert_eq!(truncate_to_width("日本語テスト", 4), "日…");
    }

    #[test]
    fn width_counts_wide_chars_twice() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("abc"), 3);
    }
}
