//! reqwest-backed Graph API client.

use crate::graph::graph_error_message;
use async_trait::async_trait;
use autopost_error::{HttpError, HttpErrorKind};
use autopost_interface::{HttpPoster, HttpResponse};
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends Graph API calls over HTTPS.
///
/// Every non-2xx status is reported as an [`HttpError`] carrying Graph's
/// own error message when the body has one.
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: reqwest::Client,
}

impl GraphClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    #[tracing::instrument]
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("autopost/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::new(HttpErrorKind::ClientBuild(e.to_string())))?;

        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpPoster for GraphClient {
    #[tracing::instrument(skip(self, form), fields(url = %url))]
    async fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| HttpError::new(HttpErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::new(HttpErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            let message = graph_error_message(&body)
                .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %message, "Graph API returned an error status");
            return Err(HttpError::new(HttpErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}
