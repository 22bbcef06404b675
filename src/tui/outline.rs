//! Outline sidebar state.
//!
//! Holds the document's headings together with two selections: the `cursor`,
//! moved by the keyboard while the sidebar is focused, and `current`, the
//! heading the reader is at according to the content scroll position.

use crate::parser::utils::{strip_ansi, strip_markdown_inline};
use crate::parser::{Heading, parse_headings};
use std::ops::Range;

/// Terminals narrower than this never show the sidebar.
pub const MIN_TERMINAL_WIDTH: u16 = 80;
pub const OUTLINE_MIN_WIDTH: u16 = 20;
pub const OUTLINE_MAX_WIDTH: u16 = 40;
/// Share of the terminal width given to the sidebar.
pub const OUTLINE_WIDTH_PERCENT: u16 = 25;

/// Sidebar width for a terminal `term_width` columns wide, 0 when it does not fit.
pub fn calculate_outline_width(term_width: u16) -> u16 {
    if term_width < MIN_TERMINAL_WIDTH {
        return 0;
    }
    let share = u32::from(term_width) * u32::from(OUTLINE_WIDTH_PERCENT) / 100;
    share.clamp(u32::from(OUTLINE_MIN_WIDTH), u32::from(OUTLINE_MAX_WIDTH)) as u16
}

#[derive(Debug, Clone)]
pub struct OutlineState {
    headings: Vec<Heading>,
    cursor: usize,
    current: usize,
    /// User toggle
    enabled: bool,
    /// Whether the document kind supports an outline at all
    available: bool,
    visible: bool,
    focused: bool,
    pub width: u16,
    pub height: u16,
    /// First heading shown in the sidebar list
    scroll: usize,
    /// Content offset and heading index of the last jump
    anchor: Option<(usize, usize)>,
}

impl Default for OutlineState {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineState {
    pub fn new() -> Self {
        Self {
            headings: Vec::new(),
            cursor: 0,
            current: 0,
            enabled: true,
            available: true,
            visible: false,
            focused: false,
            width: 0,
            height: 0,
            scroll: 0,
            anchor: None,
        }
    }

    /// Rebuild the headings from raw markdown and reset both selections.
    pub fn set_content(&mut self, markdown: &str) {
        self.headings = parse_headings(markdown);
        self.cursor = 0;
        self.current = 0;
        self.scroll = 0;
        self.anchor = None;
    }

    /// Locate each heading in the styled, rendered document.
    ///
    /// The search walks forward from the line after the previous match, so
    /// repeated heading text resolves in document order. Headings that cannot
    /// be found are left unresolved and do not move the search start. Empty
    /// input leaves every heading untouched, since the render may not have
    /// arrived yet.
    pub fn map_rendered_lines(&mut self, rendered: &str) {
        if rendered.is_empty() {
            return;
        }

        let lines: Vec<String> = rendered
            .split('\n')
            .map(|line| strip_ansi(line).to_lowercase())
            .collect();

        let mut start = 0;
        let mut resolved = 0;
        for heading in &mut self.headings {
            let needle = strip_markdown_inline(&heading.text).to_lowercase();
            let found = lines
                .iter()
                .enumerate()
                .skip(start)
                .find(|(_, line)| line.contains(needle.as_str()))
                .map(|(i, _)| i);

            heading.rendered_line = found;
            if let Some(i) = found {
                start = i + 1;
                resolved += 1;
            }
        }

        log::debug!(
            "mapped headings to rendered lines: {} resolved, {} unresolved",
            resolved,
            self.headings.len() - resolved
        );
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Heading under the cursor.
    pub fn selected_heading(&self) -> Option<&Heading> {
        self.headings.get(self.cursor)
    }

    // Layout

    /// Resize for a terminal of `term_width` x `term_height` cells.
    pub fn set_size(&mut self, term_width: u16, term_height: u16) {
        self.width = calculate_outline_width(term_width);
        self.height = term_height;
        self.refresh_visibility();
        if self.focused {
            self.ensure_cursor_visible();
        } else {
            self.ensure_current_visible();
        }
    }

    /// Rows available for headings, below the title.
    pub fn list_height(&self) -> usize {
        self.height.saturating_sub(1) as usize
    }

    /// Indices of the headings shown in the sidebar list.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.scroll.min(self.headings.len());
        let end = (start + self.list_height()).min(self.headings.len());
        start..end
    }

    // Cursor

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.headings.len() {
            self.cursor += 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
        self.ensure_cursor_visible();
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.headings.len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    pub fn ensure_cursor_visible(&mut self) {
        self.scroll_to(self.cursor);
    }

    pub fn ensure_current_visible(&mut self) {
        self.scroll_to(self.current);
    }

    fn scroll_to(&mut self, index: usize) {
        let rows = self.list_height();
        if rows == 0 {
            return;
        }
        if index < self.scroll {
            self.scroll = index;
        } else if index >= self.scroll + rows {
            self.scroll = index + 1 - rows;
        }
    }

    // Current heading

    /// Make the last heading at or before `raw_line` current.
    ///
    /// Returns whether `current` changed.
    pub fn update_current(&mut self, raw_line: usize) -> bool {
        self.anchor = None;
        if self.headings.is_empty() {
            return false;
        }

        let new_current = self
            .headings
            .iter()
            .take_while(|h| h.line <= raw_line)
            .count()
            .saturating_sub(1);

        if new_current == self.current {
            return false;
        }
        self.current = new_current;
        if !self.focused {
            self.ensure_current_visible();
        }
        true
    }

    pub fn next_heading_index(&self) -> Option<usize> {
        let next = self.current + 1;
        (next < self.headings.len()).then_some(next)
    }

    pub fn prev_heading_index(&self) -> Option<usize> {
        if self.headings.is_empty() {
            return None;
        }
        self.current.checked_sub(1)
    }

    /// Select heading `index` after the content was scrolled to `offset`.
    ///
    /// Sets both selections and remembers the offset, so the scroll position
    /// this jump produced keeps reporting the jumped-to heading.
    pub(crate) fn select(&mut self, index: usize, offset: usize) {
        if index >= self.headings.len() {
            return;
        }
        self.current = index;
        self.cursor = index;
        self.anchor = Some((offset, index));
        self.ensure_cursor_visible();
    }

    /// Whether `offset` is exactly where the last jump left the content.
    pub(crate) fn is_anchored_at(&self, offset: usize) -> bool {
        self.anchor == Some((offset, self.current))
    }

    // Visibility and focus

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the user toggle. Returns the new visibility.
    pub fn toggle_visibility(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.refresh_visibility();
        self.visible
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.refresh_visibility();
    }

    /// Outlines only make sense for markdown documents.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
        self.refresh_visibility();
    }

    /// Move keyboard focus into or out of the sidebar.
    ///
    /// Has no effect while hidden. Gaining focus puts the cursor on the
    /// current heading. Returns whether focus changed.
    pub fn toggle_focus(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.focused = !self.focused;
        if self.focused {
            self.cursor = self.current;
            self.ensure_cursor_visible();
        }
        true
    }

    fn refresh_visibility(&mut self) {
        self.visible = self.enabled && self.available && self.width > 0;
        if !self.visible {
            self.focused = false;
        }
    }
}
