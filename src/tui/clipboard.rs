//! Copying to the clipboard.
//!
//! Every copy goes out twice: as an OSC 52 escape sequence, which the
//! terminal applies to the clipboard of the machine it runs on (so it works
//! over SSH), and through the native clipboard of the host via arboard.

use crossterm::clipboard::CopyToClipboard;
use crossterm::queue;
use std::io::{self, Write};

#[derive(Default)]
pub struct Clipboard {
    // Created on first copy; on Linux the instance must stay alive to serve pastes
    system: Option<arboard::Clipboard>,
}

impl Clipboard {
    /// Copy `text` through both channels. Fails only when neither worked.
    pub fn copy(&mut self, text: &str) -> Result<(), String> {
        let osc52 = write_osc52(&mut io::stdout(), text);
        let system = self.copy_system(text);
        copy_outcome(system, osc52)
    }

    fn copy_system(&mut self, text: &str) -> Result<(), String> {
        if self.system.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| format!("Clipboard not available: {}", e))?;
            self.system = Some(clipboard);
        }
        let Some(clipboard) = self.system.as_mut() else {
            return Err("Clipboard not available".to_string());
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Clipboard error: {}", e))
    }
}

/// Write the OSC 52 "set clipboard" sequence for `text` to `out`.
pub fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(out, CopyToClipboard::to_clipboard_from(text))?;
    out.flush()
}

/// Whether the OSC 52 write is acknowledged is up to the terminal, so a
/// successful write counts as a copy.
fn copy_outcome(system: Result<(), String>, osc52: io::Result<()>) -> Result<(), String> {
    match (system, osc52) {
        (Ok(()), _) => Ok(()),
        (Err(e), Ok(())) => {
            log::debug!("copied via OSC 52 only: {}", e);
            Ok(())
        }
        (Err(e), Err(osc52)) => Err(format!("{} (OSC 52: {})", e, osc52)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut out = Vec::new();
        write_osc52(&mut out, "hi").unwrap();
        let sequence = String::from_utf8(out).unwrap();

        assert!(sequence.starts_with("\x1b]52;c;"));
        // base64 of "hi"
        assert!(sequence.contains("aGk="));
    }

    #[test]
    fn test_osc52_alone_is_enough() {
        let no_system = Err("Clipboard not available: no display".to_string());
        assert_eq!(copy_outcome(no_system, Ok(())), Ok(()));
        assert_eq!(
            copy_outcome(Ok(()), Err(io::Error::other("closed"))),
            Ok(())
        );
    }

    #[test]
    fn test_both_channels_failing_reports_both() {
        let err = copy_outcome(
            Err("Clipboard not available: no display".to_string()),
            Err(io::Error::other("closed")),
        )
        .unwrap_err();
        assert!(err.contains("no display"));
        assert!(err.contains("OSC 52: closed"));
    }
}
