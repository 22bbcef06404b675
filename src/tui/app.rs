use crate::config::Config;
use crate::document::Document;
use crate::keybindings::{Action, KeybindingMode, Keybindings};
use crate::render::worker::{RenderEvent, RenderJob};
use crate::render::{LINE_NUMBER_WIDTH, RenderOptions};
use crate::tui::clipboard::Clipboard;
use crate::tui::outline::OutlineState;
use crate::tui::sync::{self, ScrollView};
use crate::tui::theme::{Theme, ThemeName};
use crate::tui::viewport::Viewport;
use crossterm::event::KeyEvent;
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const STATUS_BAR_HEIGHT: u16 = 1;
/// How long a status message stays up.
pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);
/// Columns used by the help section.
pub const HELP_COLUMNS: usize = 3;

pub struct App {
    pub document: Document,
    pub viewport: Viewport,
    pub outline: OutlineState,
    pub theme: Theme,
    pub keybindings: Keybindings,
    pub show_help: bool,
    pub status_message: Option<String>, // Temporary status message to display
    status_message_time: Option<Instant>,
    pub should_quit: bool,
    /// Terminal size
    pub width: u16,
    pub height: u16,
    needs_render: bool,

    clipboard: Clipboard,

    config: Config,
}

impl App {
    pub fn new(document: Document, config: Config) -> Self {
        let mut outline = OutlineState::new();
        outline.set_enabled(config.ui.show_outline);
        outline.set_available(document.is_markdown());
        if document.is_markdown() {
            outline.set_content(&document.body);
        }

        Self {
            document,
            viewport: Viewport::default(),
            outline,
            theme: Theme::from_name(ThemeName::for_style(&config.ui.style)),
            keybindings: config.keybindings(),
            show_help: false,
            status_message: None,
            status_message_time: None,
            should_quit: false,
            width: 0,
            height: 0,
            needs_render: true,
            clipboard: Clipboard::default(),
            config,
        }
    }

    /// Key map mode for the current state.
    pub fn mode(&self) -> KeybindingMode {
        if self.show_help {
            KeybindingMode::Help
        } else if self.outline.is_focused() {
            KeybindingMode::Outline
        } else {
            KeybindingMode::Pager
        }
    }

    // Layout

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    /// Recompute the sidebar and content sizes. A change of content width
    /// schedules a re-render.
    fn relayout(&mut self) {
        let body_height = self
            .height
            .saturating_sub(STATUS_BAR_HEIGHT + self.help_height());
        self.outline.set_size(self.width, body_height);

        let sidebar = if self.outline.is_visible() {
            self.outline.width
        } else {
            0
        };
        let content_width = self.width.saturating_sub(sidebar);
        if content_width != self.viewport.width {
            self.needs_render = true;
        }
        self.viewport.width = content_width;
        self.viewport.height = body_height;
        let offset = self.viewport.offset();
        self.viewport.set_offset(offset);
    }

    /// Key bindings shown in the help section, as (keys, description).
    pub fn help_items(&self) -> Vec<(String, &'static str)> {
        let mut seen = HashSet::new();
        [KeybindingMode::Pager, KeybindingMode::Outline]
            .into_iter()
            .flat_map(|mode| self.keybindings.help_entries(mode))
            .filter(|(action, _)| seen.insert(*action))
            .map(|(action, keys)| (keys.join("/"), action.description()))
            .collect()
    }

    /// Rows taken by the help section, 0 when hidden.
    pub fn help_height(&self) -> u16 {
        if !self.show_help {
            return 0;
        }
        let rows = self.help_items().len().div_ceil(HELP_COLUMNS) + 1;
        (rows as u16).min(self.height / 2)
    }

    // Rendering

    /// The render to dispatch, if one is due.
    pub fn render_job(&mut self) -> Option<RenderJob> {
        if !self.needs_render || self.viewport.width == 0 {
            return None;
        }
        self.needs_render = false;

        let mut width = self.config.render.wrap_width(self.viewport.width as usize);
        if self.config.ui.show_line_numbers {
            width = width.saturating_sub(LINE_NUMBER_WIDTH);
        }

        Some(RenderJob {
            markdown: self.document.body.clone(),
            options: RenderOptions {
                width,
                style: self.config.ui.style.clone(),
                file_name: self.document.name.clone(),
                preserve_new_lines: self.config.render.preserve_new_lines,
                line_numbers: self.config.ui.show_line_numbers,
                styled: self.config.render.enabled,
            },
        })
    }

    /// Apply a finished render. Events are applied in arrival order, so the
    /// latest one wins.
    pub fn apply_render_event(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Rendered(text) => {
                log::info!(
                    "render completed: {} lines for {}",
                    text.matches('\n').count() + 1,
                    self.document.name
                );
                self.viewport.set_content(&text);
                if self.document.is_markdown() {
                    self.outline.map_rendered_lines(&text);
                }
                self.sync_outline();
            }
            RenderEvent::Failed(e) => {
                log::error!("render failed: {}", e);
                self.set_status_message(format!("✗ Render failed: {}", e));
            }
        }
    }

    // Input

    pub fn handle_key(&mut self, key: KeyEvent) {
        let mode = self.mode();
        if let Some(action) = self.keybindings.dispatch(mode, key) {
            self.perform(action);
        }
    }

    pub fn perform(&mut self, action: Action) {
        log::debug!("action {}", action);
        match action {
            Action::ScrollDown => self.viewport.scroll_down(1),
            Action::ScrollUp => self.viewport.scroll_up(1),
            Action::PageDown => self.viewport.page_down(),
            Action::PageUp => self.viewport.page_up(),
            Action::HalfPageDown => self.viewport.half_page_down(),
            Action::HalfPageUp => self.viewport.half_page_up(),
            Action::GoToTop => self.viewport.goto_top(),
            Action::GoToBottom => self.viewport.goto_bottom(),

            Action::ToggleOutline => self.toggle_outline(),
            Action::ToggleFocus => {
                self.outline.toggle_focus();
                self.keybindings.reset_sequences();
            }
            Action::NextHeading => {
                let index = self.outline.next_heading_index();
                self.step_to_heading(index);
            }
            Action::PrevHeading => {
                let index = self.outline.prev_heading_index();
                self.step_to_heading(index);
            }
            Action::CursorUp => self.outline.move_cursor_up(),
            Action::CursorDown => self.outline.move_cursor_down(),
            Action::CursorFirst => self.outline.cursor_first(),
            Action::CursorLast => self.outline.cursor_last(),
            Action::JumpToCursor => {
                if self.outline.is_visible() {
                    self.jump_to_heading(self.outline.cursor());
                }
            }

            Action::Reload => match self.reload_current_file() {
                Ok(()) => self.set_status_message("↻ File reloaded".to_string()),
                Err(e) => self.set_status_message(format!("✗ Reload failed: {}", e)),
            },
            Action::CopyContents => match self.copy_contents() {
                Ok(()) => self.set_status_message("✓ Copied contents".to_string()),
                Err(e) => {
                    log::warn!("copy failed: {}", e);
                    self.set_status_message(format!("✗ {}", e));
                }
            },

            Action::ToggleHelp => self.toggle_help(),
            Action::DismissStatus => self.clear_status_message(),
            Action::Quit => self.should_quit = true,
        }

        self.sync_outline();
    }

    /// `]` and `[` need an outline, though not necessarily a visible one.
    fn step_to_heading(&mut self, index: Option<usize>) {
        if !self.document.is_markdown() || !self.outline.is_enabled() {
            return;
        }
        if let Some(index) = index {
            self.jump_to_heading(index);
        }
    }

    fn jump_to_heading(&mut self, index: usize) {
        let raw_lines = self.document.raw_line_count();
        sync::jump_to_heading(
            &mut self.outline,
            &mut self.viewport,
            raw_lines,
            index,
            self.config.ui.scroll_off,
        );
    }

    /// Follow the content scroll position in the sidebar, unless the user
    /// is steering the sidebar.
    fn sync_outline(&mut self) {
        if self.outline.is_visible() && !self.outline.is_focused() {
            let raw_lines = self.document.raw_line_count();
            sync::sync_current_heading(&mut self.outline, &self.viewport, raw_lines);
        }
    }

    pub fn toggle_outline(&mut self) {
        if !self.document.is_markdown() {
            return;
        }
        self.outline.toggle_visibility();
        if self.outline.is_enabled() {
            self.outline.set_content(&self.document.body);
        }
        self.keybindings.reset_sequences();
        self.relayout();
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.keybindings.reset_sequences();
        self.relayout();
        if self.viewport.at_bottom() {
            self.viewport.goto_bottom();
        }
    }

    // Document

    /// Re-read the file from disk and rebuild the outline.
    pub fn reload_current_file(&mut self) -> Result<(), String> {
        self.document.reload()?;
        log::info!("reloaded {}", self.document.name);
        if self.document.is_markdown() {
            self.outline.set_content(&self.document.body);
        }
        self.needs_render = true;
        Ok(())
    }

    /// Copy the raw document to the clipboard.
    pub fn copy_contents(&mut self) -> Result<(), String> {
        self.clipboard.copy(&self.document.body)
    }

    // Status messages

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
        self.status_message_time = None;
    }

    /// Drop the status message once it has been up long enough.
    pub fn clear_expired_status_message(&mut self) {
        self.clear_status_message_older_than(STATUS_MESSAGE_TIMEOUT);
    }

    fn clear_status_message_older_than(&mut self, timeout: Duration) {
        if self
            .status_message_time
            .is_some_and(|shown| shown.elapsed() >= timeout)
        {
            self.clear_status_message();
        }
    }
}
