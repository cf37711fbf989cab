//! Referral form modal
//!
//! Renders the form held by [`ReferralWidget`] and translates key presses
//! into widget edits. Submitting and closing are reported to the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    error::AppResult,
    referral::{Course, Field, FocusTarget, ReferralWidget, SubmitStatus},
    ui::theme::Theme,
};

use super::{centered_rect, ModalResult};

pub const MODAL_TITLE: &str = "Refer a Friend";
pub const SUBMIT_LABEL: &str = "Submit Referral";
const COURSE_PLACEHOLDER: &str = "Select a course";

/// The referral form dialog
pub struct ReferralModal;

impl ReferralModal {
    pub fn new() -> Self {
        Self
    }

    /// Render the modal over `area` when the widget is open
    pub fn render(&self, frame: &mut Frame, area: Rect, widget: &ReferralWidget, theme: &Theme) {
        if !widget.is_open() {
            return;
        }

        let modal_area = centered_rect(60, 90, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", MODAL_TITLE), theme.title_style()))
            .title(
                Title::from(Span::styled(" [Esc] ✕ ", theme.muted_style()))
                    .alignment(Alignment::Right),
            )
            .border_style(theme.focused_border_style());
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let mut constraints = vec![Constraint::Length(2)]; // Banner
        constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(4)));
        constraints.push(Constraint::Length(3)); // Submit button
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        self.render_banner(frame, chunks[0], widget, theme);
        for (i, field) in Field::ALL.iter().enumerate() {
            self.render_field(frame, chunks[i + 1], *field, widget, theme);
        }
        self.render_submit(frame, chunks[Field::ALL.len() + 1], widget, theme);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, widget: &ReferralWidget, theme: &Theme) {
        let banner = if widget.is_submitting() {
            Paragraph::new("Submitting referral...").style(theme.pending_style())
        } else {
            match widget.status() {
                SubmitStatus::None => return,
                SubmitStatus::Success(message) => {
                    Paragraph::new(message.as_str()).style(theme.success_style())
                }
                SubmitStatus::Error(message) => {
                    Paragraph::new(message.as_str()).style(theme.error_style())
                }
            }
        };
        frame.render_widget(banner.alignment(Alignment::Center), area);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: Field,
        widget: &ReferralWidget,
        theme: &Theme,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let focused = widget.focus() == FocusTarget::Field(field);
        let border_style = if widget.errors().contains(field) {
            theme.error_style()
        } else if focused {
            theme.focused_border_style()
        } else {
            theme.border_style()
        };

        let value = widget.form().get(field);
        let line = if field == Field::Course {
            let (text, style) = match Course::from_id(value) {
                Some(course) => (course.display_name(), theme.text_style()),
                None => (COURSE_PLACEHOLDER, theme.muted_style()),
            };
            let mut spans = vec![Span::styled(text, style)];
            if focused {
                spans.push(Span::styled("  ◀ ▶", theme.muted_style()));
            }
            Line::from(spans)
        } else {
            let mut spans = vec![Span::styled(value, theme.text_style())];
            if focused {
                spans.push(Span::styled("▏", theme.focused_border_style()));
            }
            Line::from(spans)
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.form_label())
                .border_style(border_style),
        );
        frame.render_widget(input, rows[0]);

        if let Some(message) = widget.errors().get(field) {
            frame.render_widget(
                Paragraph::new(message).style(theme.error_style()),
                rows[1],
            );
        }
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, widget: &ReferralWidget, theme: &Theme) {
        let focused = widget.focus() == FocusTarget::SubmitButton;
        let button = Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", SUBMIT_LABEL),
            theme.button_style(focused),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(theme.border_style()));
        frame.render_widget(button, area);
    }

    /// Apply a key press to the widget
    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        widget: &mut ReferralWidget,
    ) -> AppResult<ModalResult> {
        if !widget.is_open() {
            return Ok(ModalResult::None);
        }

        let on_course = widget.focus() == FocusTarget::Field(Field::Course);

        match key.code {
            KeyCode::Esc => return Ok(ModalResult::Closed),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(ModalResult::Submit);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                widget.clear_focused();
            }
            KeyCode::Enter => {
                if widget.focus() == FocusTarget::SubmitButton {
                    return Ok(ModalResult::Submit);
                }
                widget.focus_next();
            }
            KeyCode::Tab | KeyCode::Down => widget.focus_next(),
            KeyCode::BackTab | KeyCode::Up => widget.focus_prev(),
            KeyCode::Right if on_course => widget.cycle_course(true),
            KeyCode::Left if on_course => widget.cycle_course(false),
            KeyCode::Backspace => widget.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                widget.insert_char(c);
            }
            _ => {}
        }

        Ok(ModalResult::None)
    }
}

impl Default for ReferralModal {
    fn default() -> Self {
        Self::new()
    }
}
