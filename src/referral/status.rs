//! Submission status banner

/// Banner text after a successful submission
pub const SUCCESS_MESSAGE: &str = "Referral submitted successfully!";

/// Banner text for any failed submission, whatever the cause
pub const FAILURE_MESSAGE: &str = "Failed to submit referral. Please try again.";

/// Outcome banner shown inside the modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn success() -> Self {
        Self::Success(SUCCESS_MESSAGE.to_string())
    }

    pub fn failure() -> Self {
        Self::Error(FAILURE_MESSAGE.to_string())
    }

    /// Banner text, if a banner should be shown
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::None => None,
            SubmitStatus::Success(message) | SubmitStatus::Error(message) => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmitStatus::Error(_))
    }
}
