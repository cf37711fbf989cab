//! HTTP client for the referrals endpoint
//!
//! One POST per submission. No retries: a failure is terminal for the
//! attempt and reported straight back to the widget.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

use super::form::FormData;

/// Fixed path appended to the configured base URL
pub const REFERRALS_PATH: &str = "/api/referrals";

/// Seam between the submission controller and the network
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferralApi: Send + Sync {
    /// Persist one referral. Any non-success status is an error.
    async fn submit_referral(&self, form: &FormData) -> AppResult<()>;

    /// The URL requests are sent to
    fn endpoint(&self) -> String;
}

/// reqwest-backed implementation of [`ReferralApi`]
#[derive(Debug, Clone)]
pub struct HttpReferralApi {
    client: Client,
    endpoint: String,
}

impl HttpReferralApi {
    /// Build a client for the given API configuration
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(&config.base_url),
        })
    }

    /// Join a base URL and the referrals path without doubling slashes
    pub fn endpoint_for(base_url: &str) -> String {
        format!("{}{}", base_url.trim().trim_end_matches('/'), REFERRALS_PATH)
    }
}

#[async_trait]
impl ReferralApi for HttpReferralApi {
    #[instrument(skip(self, form), fields(endpoint = %self.endpoint))]
    async fn submit_referral(&self, form: &FormData) -> AppResult<()> {
        let start_time = Instant::now();
        debug!("Posting referral for course {:?}", form.course);

        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Referral accepted in {}ms", start_time.elapsed().as_millis());
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Referral rejected with status {}: {}", status, body);
        Err(AppError::SubmissionRejected {
            status: status.as_u16(),
        })
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}
