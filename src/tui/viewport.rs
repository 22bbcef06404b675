//! Scrollable content viewport holding the rendered document lines.

use super::sync::ScrollView;

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    lines: Vec<String>,
    offset: usize,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the content, keeping the offset if it is still reachable.
    pub fn set_content(&mut self, content: &str) {
        self.lines = if content.is_empty() {
            Vec::new()
        } else {
            content
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect()
        };
        if self.offset > self.lines.len().saturating_sub(1) {
            self.goto_bottom();
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines currently on screen.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.offset.min(self.lines.len());
        let end = (start + self.height as usize).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.height as usize / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.height as usize / 2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down((self.height as usize).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up((self.height as usize).max(1));
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Fraction of the document scrolled past, in `[0, 1]`.
    pub fn scroll_percent(&self) -> f64 {
        if self.lines.len() <= self.height as usize {
            return 1.0;
        }
        let max = self.max_offset() as f64;
        (self.offset as f64 / max).clamp(0.0, 1.0)
    }
}

impl ScrollView for Viewport {
    fn offset(&self) -> usize {
        self.offset
    }

    fn total_lines(&self) -> usize {
        self.lines.len()
    }

    fn view_height(&self) -> usize {
        self.height as usize
    }

    fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }
}
