mod ansi;
mod app;
mod clipboard;
pub mod outline;
pub mod sync;
pub mod theme;
mod ui;
pub mod viewport;
mod watcher;

pub use app::App;
pub use theme::ThemeName;

use crate::render::MarkdownRenderer;
use crate::render::worker::RenderWorker;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;

/// Event poll timeout, short enough for status messages and file changes
/// to show up promptly.
const TICK: Duration = Duration::from_millis(100);

/// Run the pager until the user quits.
///
/// Renders happen on background threads through a [`RenderWorker`]; their
/// results are applied at the top of each tick, in arrival order.
pub fn run(
    terminal: &mut DefaultTerminal,
    app: App,
    renderer: Arc<dyn MarkdownRenderer>,
) -> Result<()> {
    let mut app = app;
    let worker = RenderWorker::new(renderer);

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    // Create file watcher for live reload
    let mut file_watcher = app
        .document
        .path
        .as_deref()
        .and_then(|path| match watcher::FileWatcher::new(path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                log::warn!("live reload disabled: {}", e);
                None
            }
        });

    loop {
        for event in worker.drain() {
            app.apply_render_event(event);
        }
        if let Some(job) = app.render_job() {
            worker.request(job);
        }

        terminal.draw(|frame| ui::render(frame, &mut app))?;

        if !event::poll(TICK)? {
            if let Some(watcher) = file_watcher.as_mut()
                && watcher.check_for_changes()
            {
                match app.reload_current_file() {
                    Ok(()) => {
                        app.set_status_message("↻ File reloaded (external change)".to_string())
                    }
                    Err(e) => app.set_status_message(format!("✗ Reload failed: {}", e)),
                }
                watcher.rewatch();
            }
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
