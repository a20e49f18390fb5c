//! Facebook Graph API endpoints and response handling.

use autopost_core::{DestinationKind, NO_POST_ID_ERROR, PostStatus};
use serde_json::Value;

/// Graph API root used when none is configured.
pub const GRAPH_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// The four ways a post can be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum GraphEndpoint {
    /// Text post on a Page feed
    PageStatus,
    /// Photo with caption on a Page
    PagePhoto,
    /// Text post on a Group feed
    GroupStatus,
    /// Photo with caption in a Group
    GroupPhoto,
}

impl GraphEndpoint {
    /// Picks the endpoint for a destination kind and image availability.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost_core::DestinationKind;
    /// use autopost_social::GraphEndpoint;
    ///
    /// assert_eq!(GraphEndpoint::select(DestinationKind::Group, true), GraphEndpoint::GroupPhoto);
    /// assert_eq!(GraphEndpoint::PagePhoto.edge(), "photos");
    /// ```
    pub fn select(kind: DestinationKind, has_image: bool) -> Self {
        match (kind, has_image) {
            (DestinationKind::Page, false) => Self::PageStatus,
            (DestinationKind::Page, true) => Self::PagePhoto,
            (DestinationKind::Group, false) => Self::GroupStatus,
            (DestinationKind::Group, true) => Self::GroupPhoto,
        }
    }

    /// Graph edge posted to.
    pub fn edge(&self) -> &'static str {
        match self {
            Self::PageStatus | Self::GroupStatus => "feed",
            Self::PagePhoto | Self::GroupPhoto => "photos",
        }
    }

    /// Full URL for `target_id` under `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost_social::{GRAPH_API_BASE, GraphEndpoint};
    ///
    /// assert_eq!(
    ///     GraphEndpoint::PageStatus.url(GRAPH_API_BASE, "123"),
    ///     "https://graph.facebook.com/v18.0/123/feed"
    /// );
    /// ```
    pub fn url(&self, base: &str, target_id: &str) -> String {
        format!("{}/{}/{}", base.trim_end_matches('/'), target_id, self.edge())
    }
}

/// A fully prepared Graph API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    endpoint: GraphEndpoint,
    url: String,
    fields: Vec<(&'static str, String)>,
}

impl GraphRequest {
    /// Prepares the call that publishes `message` to `target_id`.
    ///
    /// With an image the message becomes the photo caption.
    pub fn new(
        base: &str,
        kind: DestinationKind,
        target_id: &str,
        access_token: &str,
        message: String,
        image_url: Option<String>,
    ) -> Self {
        let endpoint = GraphEndpoint::select(kind, image_url.is_some());
        let fields = match image_url {
            Some(image_url) => vec![
                ("url", image_url),
                ("caption", message),
                ("access_token", access_token.to_string()),
            ],
            None => vec![
                ("message", message),
                ("access_token", access_token.to_string()),
            ],
        };

        Self {
            endpoint,
            url: endpoint.url(base, target_id),
            fields,
        }
    }

    /// The endpoint variant.
    pub fn endpoint(&self) -> GraphEndpoint {
        self.endpoint
    }

    /// The URL to POST to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Form fields as borrowed pairs.
    pub fn form(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect()
    }
}

/// Reads the post ID out of a successful response body.
///
/// Anything without a usable `id`, including a body that is not JSON, is a
/// failure.
///
/// # Examples
///
/// ```
/// use autopost_core::PostStatus;
/// use autopost_social::interpret_response;
///
/// assert_eq!(
///     interpret_response(r#"{"id":"12345"}"#),
///     PostStatus::Posted { post_id: "12345".to_string() }
/// );
/// assert!(matches!(interpret_response("{}"), PostStatus::Failed { .. }));
/// ```
pub fn interpret_response(body: &str) -> PostStatus {
    let post_id = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        });

    match post_id {
        Some(post_id) => PostStatus::Posted { post_id },
        None => PostStatus::Failed {
            error: NO_POST_ID_ERROR.to_string(),
        },
    }
}

/// Extracts `error.message` from a Graph API error body.
pub fn graph_error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Text describing a non-success response.
pub fn status_error_message(status: u16, body: &str) -> String {
    let detail = graph_error_message(body).unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    }
}
