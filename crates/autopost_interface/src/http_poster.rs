//! Outbound HTTP capability.

use async_trait::async_trait;
use autopost_error::HttpError;
use derive_getters::Getters;
use std::sync::Arc;

/// A response that reached the client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct HttpResponse {
    /// HTTP status code
    status: u16,
    /// Raw response body
    body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends form-encoded POST requests.
///
/// Implementations decide which statuses count as transport failures; the
/// Graph API client reports every non-2xx status as an [`HttpError`].
#[async_trait]
pub trait HttpPoster: Send + Sync {
    /// POST `form` to `url`.
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be completed.
    async fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: HttpPoster + ?Sized> HttpPoster for Arc<T> {
    async fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        (**self).post(url, form).await
    }
}
