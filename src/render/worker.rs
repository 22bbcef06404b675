//! Background rendering.
//!
//! Each request runs on its own thread and posts a [`RenderEvent`] back to the
//! UI loop. Requests are never cancelled: a newer request simply produces a
//! later event, and the loop applies events in the order they arrive.

use super::{MarkdownRenderer, RenderOptions, render_document};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Outcome of a render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Rendered(String),
    Failed(String),
}

/// A render request: the markdown plus how to render it.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub markdown: String,
    pub options: RenderOptions,
}

pub struct RenderWorker {
    renderer: Arc<dyn MarkdownRenderer>,
    sender: Sender<RenderEvent>,
    receiver: Receiver<RenderEvent>,
}

impl RenderWorker {
    pub fn new(renderer: Arc<dyn MarkdownRenderer>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            renderer,
            sender,
            receiver,
        }
    }

    /// Dispatch a render; its result arrives later through [`Self::drain`].
    pub fn request(&self, job: RenderJob) {
        let renderer = Arc::clone(&self.renderer);
        let sender = self.sender.clone();
        log::debug!(
            "render dispatched: {} bytes, width {}",
            job.markdown.len(),
            job.options.width
        );

        thread::spawn(move || {
            let event = match render_document(renderer.as_ref(), &job.markdown, &job.options) {
                Ok(rendered) => RenderEvent::Rendered(rendered),
                Err(e) => RenderEvent::Failed(e.to_string()),
            };
            // The loop may already be gone on shutdown.
            let _ = sender.send(event);
        });
    }

    /// Collect every event that has arrived since the last call.
    pub fn drain(&self) -> Vec<RenderEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}
