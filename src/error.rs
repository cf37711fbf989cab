//! Error handling for the referral widget
//!
//! Errors are defined with thiserror. Submission failures are recoverable:
//! the widget always returns to an interactive state.

use thiserror::Error;

/// Application result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error enum
#[derive(Error, Debug)]
pub enum AppError {
    /// The referrals endpoint answered with a non-success status
    #[error("Referral submission rejected with status {status}")]
    SubmissionRejected { status: u16 },

    /// The request could not complete (connect, timeout, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Terminal/UI operation errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic application errors
    #[error("Application error: {message}")]
    Application { message: String },
}

impl AppError {
    /// Create a new Config error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new Application error
    pub fn application<S: Into<String>>(message: S) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// Whether this error came from talking to the referrals endpoint.
    ///
    /// Both kinds collapse into the same user-facing banner.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            AppError::SubmissionRejected { .. } | AppError::Transport(_)
        )
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::SubmissionRejected { .. } => true,
            AppError::Transport(_) => true,
            AppError::Application { .. } => true,
            AppError::Io(_) => false,
            AppError::Terminal(_) => false,
            AppError::Config { .. } => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::SubmissionRejected { .. } => ErrorSeverity::Medium,
            AppError::Transport(_) => ErrorSeverity::Medium,
            AppError::Io(_) => ErrorSeverity::High,
            AppError::Config { .. } => ErrorSeverity::High,
            AppError::Terminal(_) => ErrorSeverity::High,
            AppError::Application { .. } => ErrorSeverity::Medium,
        }
    }
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl ErrorSeverity {
    /// Convert severity to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Medium => "MEDIUM",
            ErrorSeverity::High => "HIGH",
        }
    }
}
