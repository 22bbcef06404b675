//! The document being paged: where it came from and its raw text.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd", "mkdn"];

/// Display name used when the body was piped in.
pub const STDIN_NAME: &str = "stdin";

#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Source file, `None` for piped input
    pub path: Option<PathBuf>,
    /// Name shown in the status bar
    pub name: String,
    /// Raw markdown (or source code) text
    pub body: String,
}

impl Document {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: None,
            name: name.into(),
            body: body.into(),
        }
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> io::Result<Self> {
        let body = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        Ok(Self {
            path: Some(path),
            name,
            body,
        })
    }

    /// Read the whole of stdin as the document body.
    pub fn from_stdin() -> io::Result<Self> {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        Ok(Self::new(STDIN_NAME, body))
    }

    /// Re-read the body from disk.
    pub fn reload(&mut self) -> Result<(), String> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| "piped input cannot be reloaded".to_string())?;
        self.body = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Ok(())
    }

    /// Markdown unless the name carries a non-markdown extension.
    pub fn is_markdown(&self) -> bool {
        is_markdown_file(&self.name)
    }

    pub fn raw_line_count(&self) -> usize {
        crate::parser::raw_line_count(&self.body)
    }
}

/// Files without an extension are treated as markdown.
pub fn is_markdown_file(name: &str) -> bool {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        None => true,
        Some(ext) => MARKDOWN_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
    }
}
