pub mod commands;

use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use mdglance::Config;
use mdglance::render::STYLES;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdglance")]
#[command(version)]
#[command(about = "A terminal markdown pager with an outline sidebar")]
#[command(
    long_about = "mdglance - page through markdown with an outline of its headings.\n\n\
    The sidebar follows your scroll position; focus it with Tab to jump between\n\
    sections, or use ] and [ from the document.\n\n\
    Examples:\n  \
    mdglance README.md            # Interactive pager\n  \
    cat notes.md | mdglance       # Page piped markdown\n  \
    mdglance -l README.md         # List headings\n  \
    mdglance -l -o json doc.md    # Headings as JSON\n  \
    mdglance -p README.md         # Render to stdout"
)]
pub struct Cli {
    /// File to view, or '-' for stdin
    ///
    /// Markdown files get the outline sidebar; any other file is shown as a
    /// code block with line numbers. When omitted and stdin is piped, stdin
    /// is read.
    pub file: Option<PathBuf>,

    /// Render style
    #[arg(short = 's', long = "style", value_name = "STYLE",
          value_parser = PossibleValuesParser::new(STYLES.iter().copied()))]
    pub style: Option<String>,

    /// Word-wrap width (0 = fit the terminal)
    #[arg(short = 'w', long = "width", value_name = "WIDTH")]
    pub width: Option<usize>,

    /// Show the outline sidebar on start
    #[arg(long = "outline", conflicts_with = "no_outline")]
    pub outline: bool,

    /// Start with the outline sidebar hidden
    #[arg(long = "no-outline")]
    pub no_outline: bool,

    /// Show line numbers
    #[arg(short = 'n', long = "line-numbers")]
    pub line_numbers: bool,

    /// Keep single newlines instead of joining paragraph lines
    #[arg(long = "preserve-new-lines")]
    pub preserve_new_lines: bool,

    /// List the document's headings and exit
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output format for --list
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Render to stdout instead of opening the pager
    #[arg(short = 'p', long = "print", conflicts_with = "list")]
    pub print: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `#`-prefixed headings, one per line
    #[default]
    Plain,
    /// JSON array of {level, text, line}
    Json,
}

impl Cli {
    /// Layer command-line flags over the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(style) = &self.style {
            config.ui.style = style.clone();
        }
        if let Some(width) = self.width {
            config.render.max_width = width;
        }
        if self.outline {
            config.ui.show_outline = true;
        }
        if self.no_outline {
            config.ui.show_outline = false;
        }
        if self.line_numbers {
            config.ui.show_line_numbers = true;
        }
        if self.preserve_new_lines {
            config.render.preserve_new_lines = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mdglance", "README.md"]);
        assert_eq!(cli.file, Some(PathBuf::from("README.md")));
        assert_eq!(cli.output, OutputFormat::Plain);
        assert!(!cli.list && !cli.print);

        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert!(config.ui.show_outline);
        assert_eq!(config.render.max_width, 120);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "mdglance",
            "-s",
            "light",
            "-w",
            "60",
            "--no-outline",
            "-n",
            "--preserve-new-lines",
        ]);
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(config.ui.style, "light");
        assert_eq!(config.render.max_width, 60);
        assert!(!config.ui.show_outline);
        assert!(config.ui.show_line_numbers);
        assert!(config.render.preserve_new_lines);
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["mdglance", "-s", "neon"]).is_err());
    }

    #[test]
    fn test_list_and_print_conflict() {
        assert!(Cli::try_parse_from(["mdglance", "-l", "-p", "a.md"]).is_err());
        assert!(Cli::try_parse_from(["mdglance", "--outline", "--no-outline"]).is_err());
    }

    #[test]
    fn test_file_help_describes_code_view() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("code block with line numbers"));
        assert!(!help.contains("highlighted"));
    }

    #[test]
    fn test_json_list() {
        let cli = Cli::parse_from(["mdglance", "-l", "-o", "json", "doc.md"]);
        assert!(cli.list);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
