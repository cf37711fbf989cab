//! User Interface module
//!
//! Terminal rendering with ratatui: the landing screen, a status bar, and
//! the referral modal drawn on top when open.

pub mod components;
pub mod theme;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tracing::debug;

use crate::{
    app::state::AppState,
    config::UIConfig,
    error::AppResult,
    referral::ReferralWidget,
};
use components::{Component, LandingComponent, ModalResult, ReferralModal, StatusBarComponent};
use theme::Theme;

/// Main UI renderer
pub struct UI {
    /// Current theme
    theme: Theme,
    landing: LandingComponent,
    status_bar: StatusBarComponent,
    referral_modal: ReferralModal,
}

impl UI {
    /// Create a new UI instance
    pub fn new(config: &UIConfig, endpoint: &str) -> Self {
        debug!("Initializing UI with theme: {}", config.theme);

        Self {
            theme: Theme::load(&config.theme),
            landing: LandingComponent::new(),
            status_bar: StatusBarComponent::new(endpoint),
            referral_modal: ReferralModal::new(),
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Landing
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.landing.render(frame, chunks[0], state, &self.theme);
        self.status_bar.render(frame, chunks[1], state, &self.theme);
        self.referral_modal
            .render(frame, chunks[0], &state.referral, &self.theme);
    }

    /// Forward a key press to the referral modal
    pub fn handle_modal_key(
        &mut self,
        key: KeyEvent,
        widget: &mut ReferralWidget,
    ) -> AppResult<ModalResult> {
        self.referral_modal.handle_key_event(key, widget)
    }
}
