//! Non-interactive modes: heading listing and rendering to stdout.

use super::OutputFormat;
use color_eyre::Result;
use mdglance::render::{LINE_NUMBER_WIDTH, MarkdownRenderer, RenderOptions, render_document};
use mdglance::{Config, Document, Heading, parse_headings};

/// Width used when stdout is not a terminal.
const FALLBACK_WIDTH: usize = 80;

/// Format the document's headings for `--list`.
pub fn list_headings(document: &Document, format: OutputFormat) -> Result<String> {
    let headings = parse_headings(&document.body);
    match format {
        OutputFormat::Plain => Ok(format_plain(&headings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&headings)?),
    }
}

fn format_plain(headings: &[Heading]) -> String {
    headings
        .iter()
        .map(|h| format!("{} {}\n", "#".repeat(h.level), h.text))
        .collect()
}

/// Render the whole document for `--print`, wrapped to the terminal width.
pub fn print_document(
    renderer: &dyn MarkdownRenderer,
    document: &Document,
    config: &Config,
) -> Result<String> {
    let terminal_width = crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH);
    render_for_width(renderer, document, config, terminal_width)
}

fn render_for_width(
    renderer: &dyn MarkdownRenderer,
    document: &Document,
    config: &Config,
    terminal_width: usize,
) -> Result<String> {
    let mut width = config.render.wrap_width(terminal_width);
    if config.ui.show_line_numbers {
        width = width.saturating_sub(LINE_NUMBER_WIDTH);
    }
    let options = RenderOptions {
        width,
        style: config.ui.style.clone(),
        file_name: document.name.clone(),
        preserve_new_lines: config.render.preserve_new_lines,
        line_numbers: config.ui.show_line_numbers,
        styled: config.render.enabled,
    };
    render_document(renderer, &document.body, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdglance::render::TermimadRenderer;

    const SAMPLE: &str = "# Title\n\n```\n# not a heading\n```\n## Usage ##\n";

    #[test]
    fn test_list_plain() {
        let doc = Document::new("doc.md", SAMPLE);
        let out = list_headings(&doc, OutputFormat::Plain).unwrap();
        assert_eq!(out, "# Title\n## Usage\n");
    }

    #[test]
    fn test_list_json() {
        let doc = Document::new("doc.md", SAMPLE);
        let out = list_headings(&doc, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["level"], 2);
        assert_eq!(value[1]["text"], "Usage");
        assert_eq!(value[1]["line"], 5);
        assert!(value[1].get("rendered_line").is_none());
    }

    #[test]
    fn test_list_without_headings() {
        let doc = Document::new("doc.md", "just text");
        assert_eq!(list_headings(&doc, OutputFormat::Plain).unwrap(), "");
        assert_eq!(list_headings(&doc, OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_print_unstyled() {
        let doc = Document::new("doc.md", "# Title\nbody");
        let mut config = Config::default();
        config.render.enabled = false;
        let out = render_for_width(&TermimadRenderer, &doc, &config, 100).unwrap();
        assert_eq!(out, "# Title\nbody");
    }

    #[test]
    fn test_print_plain_style() {
        let doc = Document::new("doc.md", "Some *text* here");
        let mut config = Config::default();
        config.ui.style = "notty".to_string();
        let out = render_for_width(&TermimadRenderer, &doc, &config, 100).unwrap();
        assert!(out.contains("text"));
    }
}
