//! Markdown heading extraction.
//!
//! Headings are pulled out of the raw markdown with a single pass over its
//! lines. The only state carried between lines is whether the scanner is
//! inside a fenced code block, where heading syntax is inert.

pub mod utils;

use serde::Serialize;

/// Deepest ATX heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// A markdown heading extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1-6 for `#` through `######`
    pub level: usize,
    /// Heading text without the `#` markers or a closing hash run
    pub text: String,
    /// Line in the raw markdown (0-indexed)
    pub line: usize,
    /// Line in the rendered output (0-indexed), `None` until resolved
    #[serde(skip)]
    pub rendered_line: Option<usize>,
}

impl Heading {
    pub fn new(level: usize, text: impl Into<String>, line: usize) -> Self {
        Self {
            level,
            text: text.into(),
            line,
            rendered_line: None,
        }
    }
}

/// Extract ATX headings from raw markdown, in document order.
///
/// Lines inside fenced code blocks (opened by ```` ``` ```` or `~~~`) are never
/// considered. A single flag tracks the fence, so either marker closes a block
/// opened by the other.
///
/// # Examples
///
/// ```
/// use mdglance::parse_headings;
///
/// let headings = parse_headings("# Title\n## Section ##");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[1].text, "Section");
/// assert_eq!(headings[1].line, 1);
/// ```
pub fn parse_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_code_block = false;

    for (line_num, line) in markdown.split('\n').enumerate() {
        if utils::is_fence_line(line) {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        if let Some((level, text)) = parse_atx_heading(line) {
            headings.push(Heading::new(level, text, line_num));
        }
    }

    headings
}

/// Number of lines in the raw markdown, counted the same way heading lines are.
pub fn raw_line_count(markdown: &str) -> usize {
    markdown.matches('\n').count() + 1
}

/// Match a single line against the ATX heading shape.
///
/// 1-6 leading `#`, at least one whitespace character, then non-empty text.
/// A trailing run of `#` preceded by whitespace is a closing sequence and is
/// dropped from the text.
fn parse_atx_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[level..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    let without_closing = text.trim_end_matches('#');
    let text = if without_closing.len() < text.len()
        && without_closing.ends_with(|c: char| c.is_whitespace())
    {
        without_closing.trim_end()
    } else {
        text
    };

    Some((level, text))
}
