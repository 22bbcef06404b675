//! Outline sidebar projection: headings to display lines.

use super::util::{ELLIPSIS, pad_to_width, truncate_with_tail};
use crate::tui::outline::OutlineState;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};

pub const OUTLINE_TITLE: &str = "OUTLINE";
const CURRENT_MARKER: &str = "> ";
const NO_MARKER: &str = "  ";
/// Narrowest truncation width for heading text.
const MIN_TEXT_WIDTH: usize = 5;

/// Lines for a sidebar `width` columns wide: the title, then the headings in
/// the outline's visible range.
pub fn sidebar_lines(outline: &OutlineState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(outline.list_height() + 1);
    lines.push(Line::from(Span::styled(
        pad_to_width(&format!(" {}", OUTLINE_TITLE), width),
        theme.outline_title_style(),
    )));

    if outline.is_empty() {
        lines.push(Line::from(Span::styled(
            pad_to_width("  (no headings)", width),
            theme.outline_normal_style(),
        )));
        return lines;
    }

    for index in outline.visible_range() {
        lines.push(heading_line(outline, theme, index, width));
    }
    lines
}

fn heading_line(outline: &OutlineState, theme: &Theme, index: usize, width: usize) -> Line<'static> {
    let heading = &outline.headings()[index];
    let indent = "  ".repeat(heading.level.saturating_sub(1));
    let marker = if index == outline.current() {
        CURRENT_MARKER
    } else {
        NO_MARKER
    };

    let available = width
        .saturating_sub(indent.len() + marker.len() + 2)
        .max(MIN_TEXT_WIDTH);
    let text = truncate_with_tail(&heading.text, available, ELLIPSIS);
    let content = pad_to_width(&format!("{}{}{}", indent, marker, text), width);

    let style = if outline.is_focused() && index == outline.cursor() {
        theme.outline_cursor_style()
    } else if index == outline.current() {
        theme.outline_current_style()
    } else {
        theme.outline_normal_style()
    };
    Line::from(Span::styled(content, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    fn outline(markdown: &str, height: u16) -> OutlineState {
        let mut outline = OutlineState::new();
        outline.set_content(markdown);
        outline.set_size(120, height);
        outline
    }

    #[test]
    fn test_title_and_indentation() {
        let outline = outline("# Intro\n## Usage\n### Flags", 10);
        let lines = plain(&sidebar_lines(&outline, &Theme::dark(), 30));

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(" OUTLINE"));
        assert!(lines[1].starts_with("> Intro"));
        assert!(lines[2].starts_with("    Usage"));
        assert!(lines[3].starts_with("      Flags"));
        assert!(lines.iter().all(|l| l.chars().count() == 30));
    }

    #[test]
    fn test_current_marker_follows_current() {
        let mut outline = outline("# One\n# Two", 10);
        outline.update_current(1);
        let lines = plain(&sidebar_lines(&outline, &Theme::dark(), 20));
        assert!(lines[1].starts_with("  One"));
        assert!(lines[2].starts_with("> Two"));
    }

    #[test]
    fn test_long_heading_is_truncated() {
        let outline = outline("# A very long heading that will not fit", 10);
        let lines = plain(&sidebar_lines(&outline, &Theme::dark(), 20));
        assert_eq!(lines[1].trim_end(), "> A very long hea…");
    }

    #[test]
    fn test_deep_heading_keeps_minimum_text() {
        let outline = outline("###### Deeply nested heading", 10);
        let lines = plain(&sidebar_lines(&outline, &Theme::dark(), 12));
        assert!(lines[1].contains("Deep…"));
    }

    #[test]
    fn test_styles() {
        let theme = Theme::dark();
        let mut outline = outline("# One\n# Two\n# Three", 10);
        outline.toggle_focus();
        outline.move_cursor_down();

        let lines = sidebar_lines(&outline, &theme, 20);
        assert_eq!(lines[1].spans[0].style, theme.outline_current_style());
        assert_eq!(lines[2].spans[0].style, theme.outline_cursor_style());
        assert_eq!(lines[3].spans[0].style, theme.outline_normal_style());
    }

    #[test]
    fn test_only_visible_rows() {
        let markdown: String = (0..10).map(|i| format!("# H{}\n", i)).collect();
        let outline = outline(&markdown, 4);
        let lines = sidebar_lines(&outline, &Theme::dark(), 20);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_outline() {
        let outline = outline("plain text", 10);
        let lines = plain(&sidebar_lines(&outline, &Theme::dark(), 20));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("no headings"));
    }
}
