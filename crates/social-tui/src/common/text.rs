//! Text helpers shared by the render paths.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Makes backend-provided text safe to draw: strips escape characters and
/// expands tabs.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') || s.contains('\t') {
        Cow::Owned(s.replace('\x1b', "").replace('\t', "    "))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("bob@example.com", 20), "bob@example.com");
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_cuts_long_text() {
        assert_eq!(
            truncate_with_ellipsis("http://cdn.example.com/a.png", 10),
            "http://cd…"
        );
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_with_ellipsis("写真です", 5), "写真…");
    }

    #[test]
    fn test_sanitize_strips_escapes() {
        assert_eq!(sanitize_for_display("\x1b[1mhi\tthere"), "[1mhi    there");
        assert!(matches!(sanitize_for_display("plain"), Cow::Borrowed(_)));
    }
}
