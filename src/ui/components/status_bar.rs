//! Status bar component
//!
//! Displays the referral state and key hints.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::state::{AppState, LifecyclePhase},
    referral::WidgetStage,
    ui::{components::Component, theme::Theme},
};

/// Status bar component at the bottom of the screen
pub struct StatusBarComponent {
    endpoint: String,
}

impl StatusBarComponent {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn get_status_message(&self, state: &AppState) -> String {
        match state.lifecycle {
            LifecyclePhase::Starting => "Starting...".to_string(),
            LifecyclePhase::Quitting => "Shutting down...".to_string(),
            LifecyclePhase::Running => match state.referral.stage() {
                WidgetStage::Idle => "Ready",
                WidgetStage::Editing => "Editing",
                WidgetStage::Invalid => "Fix highlighted fields",
                WidgetStage::Submitting => "Submitting...",
                WidgetStage::Succeeded => "Referral sent",
                WidgetStage::Failed => "Submission failed",
            }
            .to_string(),
        }
    }

    fn get_help_text(&self, state: &AppState) -> &'static str {
        if state.referral.is_open() {
            "Tab/↑↓: Move | ←→: Course | Enter: Next/Submit | Ctrl+S: Submit | Esc: Close"
        } else {
            "Enter/r: Refer Now | q: Quit"
        }
    }
}

impl Component for StatusBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let sections = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Status message
                Constraint::Min(0),     // Help text
                Constraint::Length(40), // Endpoint
            ])
            .split(area);

        let status = Paragraph::new(self.get_status_message(state))
            .style(theme.text_style())
            .alignment(Alignment::Left);
        frame.render_widget(status, sections[0]);

        let help = Paragraph::new(self.get_help_text(state))
            .style(theme.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(help, sections[1]);

        let endpoint = Paragraph::new(self.endpoint.as_str())
            .style(theme.muted_style())
            .alignment(Alignment::Right);
        frame.render_widget(endpoint, sections[2]);
    }
}
