//! Text helpers shared by heading extraction and rendered-line mapping.

use regex::Regex;
use std::sync::OnceLock;

/// Whether a line opens or closes a fenced code block.
///
/// Leading indentation is ignored and anything after the marker (a language
/// tag, usually) is allowed.
///
/// # Examples
///
/// ```
/// # use mdglance::parser::utils::is_fence_line;
/// assert!(is_fence_line("```rust"));
/// assert!(is_fence_line("  ~~~"));
/// assert!(!is_fence_line("``inline``"));
/// ```
pub fn is_fence_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Remove ANSI escape sequences (SGR styling and other CSI commands).
///
/// # Examples
///
/// ```
/// # use mdglance::parser::utils::strip_ansi;
/// assert_eq!(strip_ansi("\x1b[1mbold\x1b[0m"), "bold");
/// ```
pub fn strip_ansi(text: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let pattern = ANSI.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)").unwrap()
    });
    pattern.replace_all(text, "").into_owned()
}

/// Strip inline markdown formatting (bold, italic, code, strikethrough) from text.
///
/// Heading text comes straight from the markdown source, while the rendered
/// output has already consumed these markers, so comparisons between the two
/// go through this first.
///
/// Handles: `**bold**`, `__bold__`, `*italic*`, `_italic_` (with snake_case protection),
/// `` `code` ``, and `~~strikethrough~~`.
///
/// # Examples
///
/// ```
/// # use mdglance::parser::utils::strip_markdown_inline;
/// assert_eq!(strip_markdown_inline("**bold** text"), "bold text");
/// assert_eq!(strip_markdown_inline("`code` here"), "code here");
/// assert_eq!(strip_markdown_inline("snake_case_var"), "snake_case_var");
/// ```
pub fn strip_markdown_inline(text: &str) -> String {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            (Regex::new(r"~~(.+?)~~").unwrap(), "$1"),
            (Regex::new(r"\*\*(.+?)\*\*").unwrap(), "$1"),
            (Regex::new(r"__(.+?)__").unwrap(), "$1"),
            (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
            (Regex::new(r"\*(.+?)\*").unwrap(), "$1"),
            (
                Regex::new(r"(^|[^a-zA-Z0-9])_([^_]+)_([^a-zA-Z0-9]|$)").unwrap(),
                "$1$2$3",
            ),
        ]
    });

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result
}
