//! Watches the open document so edits on disk show up without pressing `r`.

use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// Editors often emit several events per save.
const DEBOUNCE: Duration = Duration::from_millis(100);

pub struct FileWatcher {
    watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    path: PathBuf,
    last_reload: Instant,
}

impl FileWatcher {
    /// Start watching `path`.
    pub fn new(path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;
        log::debug!("watching {}", path.display());

        Ok(Self {
            watcher,
            receiver: rx,
            path: path.to_path_buf(),
            last_reload: Instant::now(),
        })
    }

    /// Whether the file changed since the last call. Drains pending events.
    pub fn check_for_changes(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.receiver.try_recv() {
                Ok(Ok(event)) => changed |= self.is_relevant_event(&event),
                Ok(Err(e)) => log::warn!("watch error on {}: {}", self.path.display(), e),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if changed && self.last_reload.elapsed() >= DEBOUNCE {
            self.last_reload = Instant::now();
            return true;
        }
        false
    }

    /// Re-arm after the file was replaced, as editors that write a new file
    /// and rename it over the old one do.
    pub fn rewatch(&mut self) {
        let _ = self.watcher.unwatch(&self.path);
        if let Err(e) = self.watcher.watch(&self.path, RecursiveMode::NonRecursive) {
            log::warn!("cannot re-watch {}: {}", self.path.display(), e);
        }
    }

    fn is_relevant_event(&self, event: &Event) -> bool {
        if !event.paths.iter().any(|p| p == &self.path) {
            return false;
        }
        matches!(
            event.kind,
            EventKind::Modify(ModifyKind::Data(_))
                | EventKind::Modify(ModifyKind::Any)
                | EventKind::Access(AccessKind::Close(AccessMode::Write))
                | EventKind::Create(_)
        )
    }
}
