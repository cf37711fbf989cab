//! Application core module
//!
//! Hosts the referral widget: terminal setup, the single-threaded event
//! loop, and routing of key presses and background events.

pub mod events;
pub mod state;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    referral::{HttpReferralApi, ReferralApi, SubmissionController, SubmitAction},
    ui::{components::modals::ModalResult, UI},
};
use events::{AppEvent, EventHandler};
use state::AppState;

/// Main application struct
pub struct App {
    /// Application state
    state: AppState,
    /// Channel for background task results
    event_handler: EventHandler,
    /// Issues referral submissions
    controller: SubmissionController,
    /// UI renderer
    ui: UI,
    /// Application configuration
    config: Config,
}

impl App {
    /// Create an application talking to the configured referrals endpoint
    pub fn new(config: Config) -> AppResult<Self> {
        let api = HttpReferralApi::new(&config.api)?;
        Self::with_api(config, Arc::new(api))
    }

    /// Create an application with a custom referrals API
    pub fn with_api(config: Config, api: Arc<dyn ReferralApi>) -> AppResult<Self> {
        let init_start = Instant::now();
        info!("Initializing {}", config.app.name);

        let event_handler = EventHandler::new();
        let controller = SubmissionController::new(
            api,
            event_handler.get_sender(),
            config.ui.auto_close_delay(),
        );
        let endpoint = controller.endpoint();
        let ui = UI::new(&config.ui, &endpoint);

        info!("Referrals endpoint: {}", endpoint);
        debug!("Application initialized in {:?}", init_start.elapsed());

        Ok(Self {
            state: AppState::new(),
            event_handler,
            controller,
            ui,
            config,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub async fn run(mut self) -> AppResult<()> {
        info!("Starting application main loop");

        self.setup_terminal()?;

        let result = self.main_loop().await;

        self.cleanup_terminal()?;

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> AppResult<()> {
        enable_raw_mode().map_err(|e| {
            warn!("Failed to enable raw mode: {}", e);
            AppError::Terminal(e.to_string())
        })?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            warn!("Failed to enter alternate screen: {}", e);
            AppError::Terminal(e.to_string())
        })?;
        Ok(())
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    async fn main_loop(&mut self) -> AppResult<()> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;
        let tick_rate = self.config.ui.tick_rate();

        self.state.mark_running();
        info!("Entering main application loop");

        loop {
            terminal.draw(|f| {
                self.ui.render(f, &self.state);
            })?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)?;
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            self.process_background_events();

            if self.state.should_quit() {
                info!("Application quit requested");
                break;
            }

            // Let spawned submission tasks make progress between polls
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Route a key press to the landing screen or the open modal
    pub fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.set_should_quit();
            return Ok(());
        }

        if self.state.referral.is_open() {
            match self.ui.handle_modal_key(key, &mut self.state.referral)? {
                ModalResult::Submit => {
                    let action = self.controller.submit(&mut self.state.referral);
                    if let SubmitAction::Invalid { invalid_fields } = action {
                        debug!("Submit blocked by {} validation error(s)", invalid_fields);
                    }
                }
                ModalResult::Closed => self.state.referral.close(),
                ModalResult::None => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested by user");
                self.state.set_should_quit();
            }
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.state.referral.open();
            }
            _ => {}
        }

        Ok(())
    }

    /// Drain every pending background event
    pub fn process_background_events(&mut self) {
        while let Some(event) = self.event_handler.try_receive_event() {
            self.handle_app_event(event);
        }
    }

    /// Apply one background event to the state
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished { generation, result } => {
                self.controller
                    .handle_completion(&mut self.state.referral, generation, result);
            }
            AppEvent::AutoCloseElapsed(ticket) => {
                if self.state.referral.auto_close(ticket) {
                    debug!("Referral modal closed after successful submission");
                }
            }
        }
    }

    /// Wait for the next background event and apply it
    pub async fn next_background_event(&mut self) -> bool {
        match self.event_handler.receive_event().await {
            Some(event) => {
                self.handle_app_event(event);
                true
            }
            None => false,
        }
    }
}
