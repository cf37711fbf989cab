//! Modal dialogs

pub mod referral;

pub use referral::ReferralModal;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Result from modal interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    /// Key consumed, nothing for the caller to do
    None,
    /// User triggered the submit control
    Submit,
    /// User dismissed the modal
    Closed,
}

/// Calculate a centered rectangle taking the given share of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
