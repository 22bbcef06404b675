mod layout;
mod sidebar;
mod util;

use layout::{DynamicLayout, Section};

use crate::tui::ansi;
use crate::tui::app::{App, HELP_COLUMNS, STATUS_BAR_HEIGHT};
use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sidebar::sidebar_lines;
use unicode_width::UnicodeWidthStr;
use util::{ELLIPSIS, pad_to_width, truncate_with_tail};

const LOGO: &str = " mdglance ";
const HELP_NOTE: &str = " ? Help ";

pub fn render(frame: &mut Frame, app: &mut App) {
    // Clear expired status messages (auto-dismiss after timeout)
    app.clear_expired_status_message();

    let area = frame.area();
    let help_height = app.help_height();
    let main_layout = DynamicLayout::vertical(area)
        .section(Section::Body, Constraint::Min(0))
        .section(Section::Status, Constraint::Length(STATUS_BAR_HEIGHT))
        .section_if(help_height > 0, Section::Help, Constraint::Length(help_height))
        .build();

    // Sidebar on the right, sized by the outline itself
    let body_layout = DynamicLayout::horizontal(main_layout.require(Section::Body))
        .section(Section::Content, Constraint::Min(0))
        .section_if(
            app.outline.is_visible(),
            Section::Outline,
            Constraint::Length(app.outline.width),
        )
        .build();

    render_content(frame, app, body_layout.require(Section::Content));
    if let Some(outline_area) = body_layout.get(Section::Outline) {
        render_outline(frame, app, outline_area);
    }

    render_status_bar(frame, app, main_layout.require(Section::Status));

    if let Some(help_area) = main_layout.get(Section::Help) {
        render_help(frame, app, help_area);
    }
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let base = Style::default().fg(app.theme.foreground);
    let lines = ansi::to_lines(app.viewport.visible_lines().iter().map(String::as_str), base);
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_outline(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(app.theme.border_style(app.outline.is_focused()));
    let inner = block.inner(area);
    let lines = sidebar_lines(&app.outline, &app.theme, inner.width as usize);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let note = app
        .status_message
        .as_deref()
        .unwrap_or(app.document.name.as_str());
    let line = status_bar_line(
        &app.theme,
        note,
        app.status_message.is_some(),
        app.viewport.scroll_percent(),
        area.width as usize,
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// Logo, note, scroll percentage and help hint, filling `width` columns.
fn status_bar_line(
    theme: &Theme,
    note: &str,
    is_message: bool,
    scroll_percent: f64,
    width: usize,
) -> Line<'static> {
    let percent = format!(" {:>3.0}% ", scroll_percent * 100.0);
    let room = width.saturating_sub(LOGO.width() + percent.width() + HELP_NOTE.width());
    let note = pad_to_width(
        &truncate_with_tail(&format!(" {}", note), room, ELLIPSIS),
        room,
    );

    Line::from(vec![
        Span::styled(LOGO, theme.logo_style()),
        Span::styled(note, theme.status_bar_style(is_message)),
        Span::styled(percent, theme.status_scroll_style(is_message)),
        Span::styled(HELP_NOTE, theme.status_help_style()),
    ])
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let lines = help_lines(&app.help_items(), &app.theme, area.width as usize);
    frame.render_widget(
        Paragraph::new(lines).style(app.theme.help_style()),
        area,
    );
}

/// Lay out (keys, description) pairs column by column, after a blank row.
fn help_lines(items: &[(String, &'static str)], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let rows = items.len().div_ceil(HELP_COLUMNS);
    let column_width = width / HELP_COLUMNS;
    let columns: Vec<&[(String, &'static str)]> = items.chunks(rows.max(1)).collect();
    let key_widths: Vec<usize> = columns
        .iter()
        .map(|column| column.iter().map(|(keys, _)| keys.width()).max().unwrap_or(0))
        .collect();

    let mut lines = vec![Line::default()];
    for row in 0..rows {
        let mut spans = Vec::new();
        for (column, key_width) in columns.iter().zip(&key_widths) {
            let Some((keys, description)) = column.get(row) else {
                continue;
            };
            let key_cell = format!("  {}", pad_to_width(keys, *key_width));
            let desc_room = column_width.saturating_sub(key_cell.width() + 1);
            let desc_cell = pad_to_width(
                &format!(" {}", truncate_with_tail(description, desc_room, ELLIPSIS)),
                desc_room + 1,
            );
            spans.push(Span::styled(key_cell, theme.help_key_style()));
            spans.push(Span::styled(desc_cell, theme.help_style()));
        }
        lines.push(Line::from(spans));
    }
    lines
}
