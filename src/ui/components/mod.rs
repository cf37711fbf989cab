//! UI Components module
//!
//! Landing screen, status bar and the referral modal.

pub mod landing;
pub mod modals;
pub mod status_bar;

pub use landing::LandingComponent;
pub use modals::{ModalResult, ReferralModal};
pub use status_bar::StatusBarComponent;

use ratatui::{layout::Rect, Frame};

use crate::{app::state::AppState, ui::theme::Theme};

/// Trait for screen components that render from application state
pub trait Component {
    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme);
}
