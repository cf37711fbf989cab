//! Refer & Earn - terminal referral-capture widget
//!
//! A call-to-action opens a modal that collects a referrer/referee pair and
//! a course, validates it locally, and POSTs it to the referrals API.
//!
//! # Architecture
//!
//! - **referral**: form data, validator, modal/submission state machine,
//!   HTTP client and submission controller
//! - **app**: event loop and background-event routing
//! - **ui**: ratatui rendering of the landing screen and the modal
//! - **config**: TOML configuration with environment overrides

pub mod app;
pub mod config;
pub mod error;
pub mod referral;
pub mod ui;

pub use app::App;
pub use error::{AppError, AppResult};

use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with structured logging
///
/// `RUST_LOG` wins over `default_level`. When `log_file` is given, output is
/// appended there instead of stdout so the terminal UI is left intact.
pub fn initialize_logging(default_level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("refer_earn={}", default_level)));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        None => registry.with(fmt::layer()).try_init()?,
    }

    Ok(())
}
