//! Referral capture core
//!
//! The widget is split into the form data model, a pure validator, the
//! modal/submission state machine, and the controller that talks to the
//! referrals endpoint.

pub mod client;
pub mod controller;
pub mod form;
pub mod status;
pub mod validation;
pub mod widget;

pub use client::{HttpReferralApi, ReferralApi, REFERRALS_PATH};
pub use controller::SubmissionController;
pub use form::{Course, Field, FormData};
pub use status::SubmitStatus;
pub use validation::{validate, FormErrors};
pub use widget::{
    AutoCloseTicket, FocusTarget, ModalVisibility, ReferralWidget, SubmissionPhase,
    SubmissionTicket, SubmitAction, WidgetStage,
};
