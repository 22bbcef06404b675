use crate::keybindings::{Keybindings, KeybindingsConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rendering style: "auto", "dark", "light" or "notty"
    #[serde(default = "default_style")]
    pub style: String,

    /// Whether the outline sidebar starts enabled
    #[serde(default = "default_true")]
    pub show_outline: bool,

    #[serde(default)]
    pub show_line_numbers: bool,

    /// Context lines kept above a heading after jumping to it
    #[serde(default = "default_scroll_off")]
    pub scroll_off: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            show_outline: true,
            show_line_numbers: false,
            scroll_off: default_scroll_off(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// When false the raw markdown is shown without styling
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Word-wrap limit; 0 wraps at the viewport width
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    #[serde(default)]
    pub preserve_new_lines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_width: default_max_width(),
            preserve_new_lines: false,
        }
    }
}

impl RenderConfig {
    /// Wrap width for a content pane `view_width` columns wide.
    pub fn wrap_width(&self, view_width: usize) -> usize {
        if self.max_width == 0 {
            view_width
        } else {
            self.max_width.min(view_width)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file; logging is off when unset
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_style() -> String {
    "auto".to_string()
}

fn default_scroll_off() -> usize {
    crate::tui::sync::SCROLL_OFF
}

fn default_max_width() -> usize {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdglance/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdglance").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdglance/config.toml
    /// - Linux: ~/.config/mdglance/config.toml
    /// - Windows: %APPDATA%/mdglance/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdglance").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/mdglance first, then falls back to ~/Library/Application Support
    ///
    /// An invalid file is an error; the caller decides whether to fall back
    /// to the defaults.
    pub fn load() -> Result<Self, String> {
        #[cfg(target_os = "macos")]
        {
            if let Some(path) = Self::xdg_config_path()
                && let Some(config) = Self::load_from(&path)?
            {
                return Ok(config);
            }
        }

        match Self::config_path() {
            Some(path) => Ok(Self::load_from(&path)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// Read one config file. `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, String> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("could not read config {}: {}", path.display(), e)),
        };
        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| format!("invalid config {}: {}", path.display(), e))
    }

    /// Get keybindings with user customizations applied
    pub fn keybindings(&self) -> Keybindings {
        self.keybindings.to_keybindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::{Action, KeybindingMode};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.style, "auto");
        assert!(config.ui.show_outline);
        assert_eq!(config.ui.scroll_off, 5);
        assert!(config.render.enabled);
        assert_eq!(config.render.max_width, 120);
        assert!(config.logging.file.is_none());
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            style = "light"

            [render]
            max_width = 0

            [keybindings.Outline]
            "l" = "JumpToCursor"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.style, "light");
        assert!(config.ui.show_outline);
        assert_eq!(config.render.max_width, 0);
        assert_eq!(config.logging.level, "info");

        let keys = config
            .keybindings()
            .keys_for_action(KeybindingMode::Outline, Action::JumpToCursor);
        assert!(keys.contains(&"l".to_string()));
    }

    #[test]
    fn test_wrap_width() {
        let mut render = RenderConfig::default();
        assert_eq!(render.wrap_width(80), 80);
        assert_eq!(render.wrap_width(200), 120);
        render.max_width = 0;
        assert_eq!(render.wrap_width(200), 200);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nshow_line_numbers = true").unwrap();
        let config = Config::load_from(file.path()).unwrap().unwrap();
        assert!(config.ui.show_line_numbers);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let loaded = Config::load_from(Path::new("/nonexistent/mdglance.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\nstyle = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.starts_with("invalid config"));
        assert!(err.contains(&file.path().display().to_string()));
    }
}
