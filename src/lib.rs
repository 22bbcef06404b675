//! # mdglance
//!
//! A terminal markdown pager whose outline sidebar follows the reader.
//!
//! The library side covers the pieces the pager is built from: heading
//! extraction, the render pipeline, the outline model and the logic that keeps
//! outline selection and scroll position in step.
//!
//! ## Example
//!
//! ```rust
//! use mdglance::parse_headings;
//!
//! let markdown = "# Introduction\nSome content.\n\n```\n# not a heading\n```\n## Background\n";
//!
//! let headings = parse_headings(markdown);
//! assert_eq!(headings.len(), 2);
//! for heading in &headings {
//!     println!("{} {} (line {})", "#".repeat(heading.level), heading.text, heading.line);
//! }
//! ```

/// Configuration loaded from `config.toml`.
pub mod config;

/// The document being paged and where it came from.
pub mod document;

/// Customizable keyboard shortcuts.
pub mod keybindings;

/// File logging setup.
pub mod logging;

/// Heading extraction from raw markdown.
pub mod parser;

/// Markdown to styled terminal text, in the foreground or on a worker thread.
pub mod render;

/// The interactive pager.
pub mod tui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use document::Document;
pub use parser::{Heading, parse_headings};
pub use tui::App;
