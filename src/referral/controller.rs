//! Submission controller
//!
//! Orchestrates validate → send → interpret → reset/close. The widget is
//! mutated only by the caller's thread; the HTTP call and the auto-close
//! delay run on spawned tasks and report back as [`AppEvent`]s.

use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    app::events::AppEvent,
    error::AppResult,
};

use super::{
    client::ReferralApi,
    widget::{AutoCloseTicket, ReferralWidget, SubmissionTicket, SubmitAction},
};

/// Drives submissions for one [`ReferralWidget`]
#[derive(Clone)]
pub struct SubmissionController {
    api: Arc<dyn ReferralApi>,
    events: mpsc::UnboundedSender<AppEvent>,
    auto_close_delay: Duration,
}

impl SubmissionController {
    pub fn new(
        api: Arc<dyn ReferralApi>,
        events: mpsc::UnboundedSender<AppEvent>,
        auto_close_delay: Duration,
    ) -> Self {
        Self {
            api,
            events,
            auto_close_delay,
        }
    }

    pub fn endpoint(&self) -> String {
        self.api.endpoint()
    }

    /// Handle a submit action.
    ///
    /// At most one request is issued; its result arrives later as
    /// [`AppEvent::SubmissionFinished`].
    pub fn submit(&self, widget: &mut ReferralWidget) -> SubmitAction {
        let action = widget.begin_submit();
        if let SubmitAction::Dispatch(ticket) = &action {
            self.dispatch(ticket.clone());
        }
        action
    }

    /// Apply a finished submission and schedule the auto-close on success
    pub fn handle_completion(
        &self,
        widget: &mut ReferralWidget,
        generation: u64,
        result: AppResult<()>,
    ) {
        if let Some(ticket) = widget.complete_submit(generation, result) {
            self.schedule_auto_close(ticket);
        }
    }

    /// Send one request and wait for it, without touching any widget
    pub async fn send(api: &dyn ReferralApi, ticket: &SubmissionTicket) -> AppResult<()> {
        api.submit_referral(&ticket.payload).await
    }

    fn dispatch(&self, ticket: SubmissionTicket) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = Self::send(api.as_ref(), &ticket).await;
            let event = AppEvent::SubmissionFinished {
                generation: ticket.generation,
                result,
            };
            if events.send(event).is_err() {
                warn!(
                    "Submission result for generation {} dropped: event loop is gone",
                    ticket.generation
                );
            }
        });
    }

    fn schedule_auto_close(&self, ticket: AutoCloseTicket) {
        let events = self.events.clone();
        let delay = self.auto_close_delay;
        debug!("Modal will close in {:?}", delay);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app shut down; nothing to close
            let _ = events.send(AppEvent::AutoCloseElapsed(ticket));
        });
    }
}
