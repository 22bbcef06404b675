//! # mdglance
//!
//! A terminal markdown pager with an outline sidebar.
//!
//! ## Usage
//!
//! Page through a document:
//! ```sh
//! mdglance README.md
//! ```
//!
//! List its headings:
//! ```sh
//! mdglance -l README.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, commands};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail};
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mdglance::render::{MarkdownRenderer, TermimadRenderer};
use mdglance::{App, Config, Document, logging};
use std::io::{IsTerminal, stdin, stdout};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    args.apply_to(&mut config);

    if let Err(e) = logging::init(&config.logging, args.log_file.as_deref()) {
        eprintln!("Warning: could not open log file: {}", e);
    }
    // Reported once logging is up, so it reaches the log file too
    if let Some(e) = config_error {
        log::warn!("using default config: {}", e);
        eprintln!("Warning: {}, using defaults", e);
    }

    let document = read_document(&args)?;
    log::info!(
        "opened {} ({} bytes, markdown: {})",
        document.name,
        document.body.len(),
        document.is_markdown()
    );

    if args.list {
        print!("{}", commands::list_headings(&document, args.output)?);
        return Ok(());
    }

    // Behave like `cat` when the output is not a terminal
    if args.print || !stdout().is_terminal() {
        let rendered = commands::print_document(&TermimadRenderer, &document, &config)?;
        println!("{}", rendered);
        return Ok(());
    }

    run_pager(document, config)
}

/// Read the input: a file, `-` for stdin, or stdin when it is piped.
fn read_document(args: &Cli) -> Result<Document> {
    match args.file.as_deref() {
        Some(path) if path == Path::new("-") => {
            Document::from_stdin().wrap_err("Failed to read stdin")
        }
        Some(path) => {
            if path.is_dir() {
                bail!("{} is a directory", path.display());
            }
            Document::load(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
        }
        None if !stdin().is_terminal() => {
            // crossterm reads keys from /dev/tty once stdin is consumed
            Document::from_stdin().wrap_err("Failed to read stdin")
        }
        None => bail!(
            "no input\n\nUsage: mdglance [OPTIONS] <FILE>\n       mdglance [OPTIONS] -\n       cat doc.md | mdglance [OPTIONS]"
        ),
    }
}

fn run_pager(document: Document, config: Config) -> Result<()> {
    enable_raw_mode().inspect_err(|e| {
        eprintln!("Failed to enable raw mode: {}", e);
        eprintln!("Note: When piping input, ensure you have a controlling terminal.");
    })?;

    stdout().execute(EnterAlternateScreen).inspect_err(|_| {
        disable_raw_mode().ok();
    })?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = ratatui::Terminal::new(backend).inspect_err(|_| {
        stdout().execute(LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    })?;

    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(TermimadRenderer);
    let app = App::new(document, config);
    let result = mdglance::tui::run(&mut terminal, app, renderer);

    // Cleanup terminal state
    stdout().execute(LeaveAlternateScreen).ok();
    disable_raw_mode().ok();

    if let Err(ref e) = result {
        log::error!("pager exited with error: {}", e);
    }
    result
}
