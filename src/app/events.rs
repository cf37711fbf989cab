//! Application event system
//!
//! Background tasks (the referral POST, the auto-close delay) report back to
//! the single-threaded event loop through an unbounded tokio channel.

use tokio::sync::mpsc;

use crate::{error::AppResult, referral::AutoCloseTicket};

/// Event handler for async operations
pub struct EventHandler {
    /// Sender for application events
    event_sender: mpsc::UnboundedSender<AppEvent>,
    /// Receiver for application events
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self {
            event_sender,
            event_receiver,
        }
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive_event(&mut self) -> Option<AppEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Wait for the next event
    pub async fn receive_event(&mut self) -> Option<AppEvent> {
        self.event_receiver.recv().await
    }

    /// Get a cloned sender for background tasks
    pub fn get_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Application events for async communication
#[derive(Debug)]
pub enum AppEvent {
    /// The referral request for `generation` resolved or failed
    SubmissionFinished {
        generation: u64,
        result: AppResult<()>,
    },

    /// The post-success delay elapsed
    AutoCloseElapsed(AutoCloseTicket),
}
