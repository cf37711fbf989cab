//! Application state management
//!
//! The host shell holds a single referral widget and its own lifecycle.

use crate::referral::ReferralWidget;

/// Central application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Application lifecycle phase
    pub lifecycle: LifecyclePhase,

    /// The referral widget mounted on the landing screen
    pub referral: ReferralWidget,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.lifecycle, LifecyclePhase::Quitting)
    }

    /// Request shutdown; the widget is disposed so late results are dropped
    pub fn set_should_quit(&mut self) {
        self.lifecycle = LifecyclePhase::Quitting;
        self.referral.dispose();
    }

    pub fn mark_running(&mut self) {
        if self.lifecycle == LifecyclePhase::Starting {
            self.lifecycle = LifecyclePhase::Running;
        }
    }
}

/// Application lifecycle phases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecyclePhase {
    #[default]
    Starting,
    Running,
    Quitting,
}
