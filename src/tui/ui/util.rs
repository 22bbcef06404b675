//! Utility functions for UI rendering
//!
//! Pure functions for width-aware text fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Fit `text` into `width` display columns, ending with `tail` when cut.
///
/// Widths are measured in terminal cells, so wide characters count double.
pub fn truncate_with_tail(text: &str, width: usize, tail: &str) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(tail.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(tail);
    out
}

/// Pad `text` with spaces up to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
