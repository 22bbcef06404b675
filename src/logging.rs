//! Log setup.
//!
//! The TUI owns the terminal, so log records only go to a file, and only when
//! one was asked for. `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Start logging to `file` (or the configured file). Does nothing when neither is set.
pub fn init(config: &LoggingConfig, file: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = file.or(config.file.as_deref()) else {
        return Ok(());
    };

    let target = OpenOptions::new().create(true).append(true).open(path)?;
    let env = Env::default().default_filter_or(config.level.as_str());

    // A logger may already be installed (tests, embedding); keep the first one.
    let _ = Builder::from_env(env)
        .target(Target::Pipe(Box::new(target)))
        .format_timestamp_millis()
        .try_init();

    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_a_noop() {
        assert!(init(&LoggingConfig::default(), None).is_ok());
    }

    #[test]
    fn test_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdglance.log");
        init(&LoggingConfig::default(), Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let config = LoggingConfig {
            file: Some("/nonexistent-dir/mdglance.log".into()),
            ..LoggingConfig::default()
        };
        assert!(init(&config, None).is_err());
    }
}
