//! Landing screen with the "Refer Now" call-to-action

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::state::AppState,
    ui::{components::Component, theme::Theme},
};

pub const HEADLINE: &str = "Refer & Earn Rewards";
pub const TAGLINE: &str =
    "Share the gift of learning and earn rewards for every successful referral";
pub const CALL_TO_ACTION: &str = "Refer Now";

/// Hero section shown behind the modal
pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LandingComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(2), // Headline
                Constraint::Length(3), // Tagline
                Constraint::Length(3), // Button
                Constraint::Min(0),
            ])
            .split(inner);

        let headline = Paragraph::new(HEADLINE)
            .style(theme.title_style())
            .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[1]);

        let tagline = Paragraph::new(TAGLINE)
            .style(theme.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(tagline, chunks[2]);

        let focused = !state.referral.is_open();
        let button = Paragraph::new(Line::from(vec![Span::styled(
            format!("  {}  ", CALL_TO_ACTION),
            theme.button_style(focused),
        )]))
        .alignment(Alignment::Center);
        frame.render_widget(button, chunks[3]);
    }
}
