//! Colour palettes for the pager chrome (sidebar, status bar, help).
//!
//! Document content carries its own styling from the renderer; these colours
//! only cover what the pager draws around it.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Dark,
    Light,
}

impl ThemeName {
    /// Palette matching a render style name. Unknown styles get the dark palette.
    pub fn for_style(style: &str) -> Self {
        if style.eq_ignore_ascii_case("light") {
            ThemeName::Light
        } else {
            ThemeName::Dark
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub foreground: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub outline_title_fg: Color,
    pub outline_normal_fg: Color,
    pub outline_current_fg: Color,
    pub outline_cursor_fg: Color,
    pub outline_cursor_bg: Color,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub status_scroll_fg: Color,
    pub status_help_bg: Color,
    pub status_message_fg: Color,
    pub status_message_bg: Color,
    pub logo_fg: Color,
    pub logo_bg: Color,
    pub help_fg: Color,
    pub help_bg: Color,
    pub help_key_fg: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            foreground: Color::Rgb(221, 221, 221),
            border_focused: Color::Rgb(238, 111, 248),
            border_unfocused: Color::Rgb(60, 60, 60),
            outline_title_fg: Color::Rgb(238, 111, 248),
            outline_normal_fg: Color::Rgb(144, 144, 144),
            outline_current_fg: Color::Rgb(236, 253, 101),
            outline_cursor_fg: Color::Rgb(255, 253, 245),
            outline_cursor_bg: Color::Rgb(64, 64, 64),
            status_bar_fg: Color::Rgb(125, 125, 125),
            status_bar_bg: Color::Rgb(36, 36, 36),
            status_scroll_fg: Color::Rgb(90, 90, 90),
            status_help_bg: Color::Rgb(50, 50, 50),
            status_message_fg: Color::Rgb(137, 240, 203),
            status_message_bg: Color::Rgb(28, 135, 96),
            logo_fg: Color::Rgb(236, 253, 101),
            logo_bg: Color::Rgb(238, 111, 248),
            help_fg: Color::Rgb(125, 125, 125),
            help_bg: Color::Rgb(27, 27, 27),
            help_key_fg: Color::Rgb(180, 180, 180),
        }
    }

    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            foreground: Color::Rgb(40, 40, 40),
            border_focused: Color::Rgb(200, 60, 210),
            border_unfocused: Color::Rgb(220, 220, 220),
            outline_title_fg: Color::Rgb(200, 60, 210),
            outline_normal_fg: Color::Rgb(110, 110, 110),
            outline_current_fg: Color::Rgb(28, 135, 96),
            outline_cursor_fg: Color::Rgb(20, 20, 20),
            outline_cursor_bg: Color::Rgb(214, 214, 214),
            status_bar_fg: Color::Rgb(101, 101, 101),
            status_bar_bg: Color::Rgb(230, 230, 230),
            status_scroll_fg: Color::Rgb(148, 148, 148),
            status_help_bg: Color::Rgb(220, 220, 220),
            status_message_fg: Color::Rgb(137, 240, 203),
            status_message_bg: Color::Rgb(28, 135, 96),
            logo_fg: Color::Rgb(255, 253, 245),
            logo_bg: Color::Rgb(200, 60, 210),
            help_fg: Color::Rgb(101, 101, 101),
            help_bg: Color::Rgb(242, 242, 242),
            help_key_fg: Color::Rgb(40, 40, 40),
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border_unfocused)
        }
    }

    pub fn outline_title_style(&self) -> Style {
        Style::default()
            .fg(self.outline_title_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn outline_normal_style(&self) -> Style {
        Style::default().fg(self.outline_normal_fg)
    }

    pub fn outline_current_style(&self) -> Style {
        Style::default()
            .fg(self.outline_current_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn outline_cursor_style(&self) -> Style {
        Style::default()
            .fg(self.outline_cursor_fg)
            .bg(self.outline_cursor_bg)
    }

    pub fn status_bar_style(&self, message: bool) -> Style {
        if message {
            Style::default()
                .fg(self.status_message_fg)
                .bg(self.status_message_bg)
        } else {
            Style::default().fg(self.status_bar_fg).bg(self.status_bar_bg)
        }
    }

    pub fn status_scroll_style(&self, message: bool) -> Style {
        if message {
            self.status_bar_style(true)
        } else {
            Style::default()
                .fg(self.status_scroll_fg)
                .bg(self.status_bar_bg)
        }
    }

    pub fn status_help_style(&self) -> Style {
        Style::default().fg(self.status_bar_fg).bg(self.status_help_bg)
    }

    pub fn logo_style(&self) -> Style {
        Style::default()
            .fg(self.logo_fg)
            .bg(self.logo_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.help_fg).bg(self.help_bg)
    }

    pub fn help_key_style(&self) -> Style {
        Style::default()
            .fg(self.help_key_fg)
            .bg(self.help_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_for_style() {
        assert_eq!(ThemeName::for_style("light"), ThemeName::Light);
        assert_eq!(ThemeName::for_style("LIGHT"), ThemeName::Light);
        assert_eq!(ThemeName::for_style("dark"), ThemeName::Dark);
        assert_eq!(ThemeName::for_style("auto"), ThemeName::Dark);
        assert_eq!(ThemeName::for_style("notty"), ThemeName::Dark);
    }

    #[test]
    fn test_border_style_tracks_focus() {
        let theme = Theme::dark();
        assert_eq!(theme.border_style(true).fg, Some(theme.border_focused));
        assert_eq!(theme.border_style(false).fg, Some(theme.border_unfocused));
    }

    #[test]
    fn test_cursor_and_current_differ() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.outline_cursor_style(), theme.outline_current_style());
            assert_ne!(theme.outline_current_style(), theme.outline_normal_style());
        }
    }
}
