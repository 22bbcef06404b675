//! Markdown to styled terminal text.
//!
//! The pager treats rendering as an opaque text producer: raw markdown goes
//! in, ANSI-styled text comes out. [`MarkdownRenderer`] is the seam, with
//! [`TermimadRenderer`] as the real implementation.

pub mod worker;

use crate::document::is_markdown_file;
use crate::parser::utils::is_fence_line;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::style::Stylize;
use std::borrow::Cow;
use std::path::Path;
use termimad::MadSkin;

/// Columns used by the line number gutter.
pub const LINE_NUMBER_WIDTH: usize = 4;

/// Styles understood by [`TermimadRenderer`].
pub const STYLES: &[&str] = &["auto", "dark", "light", "notty"];

/// Converts markdown to styled terminal output.
pub trait MarkdownRenderer: Send + Sync {
    /// Render `markdown`, word-wrapping at `width` (0 = no limit).
    fn render(
        &self,
        markdown: &str,
        width: usize,
        style: &str,
        preserve_new_lines: bool,
    ) -> Result<String>;
}

/// Renders with termimad skins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermimadRenderer;

impl TermimadRenderer {
    fn skin(style: &str) -> Result<MadSkin> {
        match style.to_lowercase().as_str() {
            "auto" | "dark" => Ok(MadSkin::default_dark()),
            "light" => Ok(MadSkin::default_light()),
            "notty" | "plain" => Ok(MadSkin::no_style()),
            other => Err(eyre!(
                "unknown style '{}' (expected one of: {})",
                other,
                STYLES.join(", ")
            )),
        }
    }
}

impl MarkdownRenderer for TermimadRenderer {
    fn render(
        &self,
        markdown: &str,
        width: usize,
        style: &str,
        preserve_new_lines: bool,
    ) -> Result<String> {
        let skin = Self::skin(style)?;
        let source = if preserve_new_lines {
            Cow::Borrowed(markdown)
        } else {
            Cow::Owned(join_soft_breaks(markdown))
        };
        let width = (width > 0).then_some(width);
        Ok(skin.text(&source, width).to_string())
    }
}

/// Everything besides the markdown itself that shapes a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Word-wrap width (0 = no limit)
    pub width: usize,
    pub style: String,
    /// Document name, used to spot code files
    pub file_name: String,
    pub preserve_new_lines: bool,
    pub line_numbers: bool,
    /// When false the raw text is shown as-is
    pub styled: bool,
}

/// Run the full render pipeline for a document body.
///
/// Code files are fenced with their extension as the language tag, rendered
/// without a width limit and always get line numbers.
pub fn render_document(
    renderer: &dyn MarkdownRenderer,
    markdown: &str,
    options: &RenderOptions,
) -> Result<String> {
    if !options.styled {
        return Ok(markdown.to_string());
    }

    let is_code = !is_markdown_file(&options.file_name);
    let width = if is_code { 0 } else { options.width };

    let content = if is_code {
        let ext = Path::new(&options.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Cow::Owned(wrap_code_block(markdown, ext))
    } else {
        Cow::Borrowed(markdown)
    };

    let mut out = renderer.render(&content, width, &options.style, options.preserve_new_lines)?;
    if is_code {
        out = out.trim().to_string();
    }

    if is_code || options.line_numbers {
        out = number_lines(&out);
    }

    Ok(out)
}

fn wrap_code_block(code: &str, language: &str) -> String {
    format!("```{}\n{}\n```", language, code.trim_end_matches('\n'))
}

fn number_lines(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let number = format!("{:>width$}", i + 1, width = LINE_NUMBER_WIDTH);
            format!("{}{}", number.dark_grey(), line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join paragraph lines separated by a single newline into one line.
///
/// Blank lines, block-level markers and fenced code are left alone.
fn join_soft_breaks(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_code_block = false;
    let mut previous_joinable = false;

    for line in markdown.split('\n') {
        if is_fence_line(line) {
            in_code_block = !in_code_block;
            out.push(line.to_string());
            previous_joinable = false;
            continue;
        }

        let joinable = !in_code_block && is_paragraph_line(line);
        match out.last_mut() {
            Some(last) if previous_joinable && joinable => {
                last.push(' ');
                last.push_str(line.trim());
            }
            _ => out.push(line.to_string()),
        }
        previous_joinable = joinable;
    }

    out.join("\n")
}

fn is_paragraph_line(line: &str) -> bool {
    let trimmed = line.trim_end();
    if trimmed.is_empty() || line.starts_with(' ') || line.starts_with('\t') {
        return false;
    }
    // Two trailing spaces mark a hard break.
    if line.ends_with("  ") {
        return false;
    }
    let first = trimmed.chars().next().unwrap_or(' ');
    if matches!(first, '#' | '>' | '|' | '-' | '*' | '+' | '<') {
        return false;
    }
    let ordered_list = trimmed
        .split_once(['.', ')'])
        .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
    !ordered_list
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Renderer double that records its calls and echoes the input.
    #[derive(Default)]
    pub(crate) struct RecordingRenderer {
        pub calls: Mutex<Vec<(String, usize, String, bool)>>,
    }

    impl MarkdownRenderer for RecordingRenderer {
        fn render(
            &self,
            markdown: &str,
            width: usize,
            style: &str,
            preserve_new_lines: bool,
        ) -> Result<String> {
            self.calls.lock().unwrap().push((
                markdown.to_string(),
                width,
                style.to_string(),
                preserve_new_lines,
            ));
            Ok(markdown.to_string())
        }
    }

    fn options(file_name: &str) -> RenderOptions {
        RenderOptions {
            width: 80,
            style: "dark".to_string(),
            file_name: file_name.to_string(),
            preserve_new_lines: false,
            line_numbers: false,
            styled: true,
        }
    }

    #[test]
    fn test_unstyled_returns_raw_markdown() {
        let renderer = RecordingRenderer::default();
        let opts = RenderOptions {
            styled: false,
            ..options("test.md")
        };
        let out = render_document(&renderer, "# Title", &opts).unwrap();
        assert_eq!(out, "# Title");
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_markdown_passes_width_and_style() {
        let renderer = RecordingRenderer::default();
        render_document(&renderer, "# Title", &options("test.md")).unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("# Title".to_string(), 80, "dark".to_string(), false));
    }

    #[test]
    fn test_code_file_is_fenced_and_numbered() {
        let renderer = RecordingRenderer::default();
        let out = render_document(&renderer, "fn main() {}\n", &options("main.rs")).unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls[0].0, "```rs\nfn main() {}\n```");
        assert_eq!(calls[0].1, 0);

        let plain = crate::parser::utils::strip_ansi(&out);
        assert_eq!(plain, "   1```rs\n   2fn main() {}\n   3```");
    }

    #[test]
    fn test_line_numbers_for_markdown() {
        let renderer = RecordingRenderer::default();
        let opts = RenderOptions {
            line_numbers: true,
            ..options("test.md")
        };
        let out = render_document(&renderer, "a\nb", &opts).unwrap();
        let plain = crate::parser::utils::strip_ansi(&out);
        assert_eq!(plain, "   1a\n   2b");
    }

    #[test]
    fn test_termimad_keeps_heading_text() {
        let out = TermimadRenderer
            .render("# Hello World\n\nThis is a **test**.", 80, "dark", false)
            .unwrap();
        let plain = crate::parser::utils::strip_ansi(&out);
        assert!(plain.contains("Hello World"));
        assert!(plain.contains("test"));
    }

    #[test]
    fn test_termimad_styles() {
        for style in STYLES {
            assert!(TermimadRenderer.render("# Hi", 40, style, true).is_ok());
        }
        assert!(TermimadRenderer.render("# Hi", 40, "neon", true).is_err());
    }

    #[test]
    fn test_join_soft_breaks() {
        let md = "one\ntwo\n\n# Head\n- item\n- item\n```\na\nb\n```\nthree  \nfour";
        assert_eq!(
            join_soft_breaks(md),
            "one two\n\n# Head\n- item\n- item\n```\na\nb\n```\nthree  \nfour"
        );
    }

    #[test]
    fn test_ordered_list_not_joined() {
        assert_eq!(join_soft_breaks("1. a\n2. b"), "1. a\n2. b");
    }
}
