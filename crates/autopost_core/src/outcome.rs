//! Per-destination publish results.

use crate::{Destination, DestinationKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Error text used when Facebook answers without a post id.
pub const NO_POST_ID_ERROR: &str = "No post ID returned from Facebook";

/// Whether a destination received the post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostStatus {
    /// Facebook accepted the post
    Posted {
        /// ID of the created post
        post_id: String,
    },
    /// The post was not created
    Failed {
        /// Why the post failed
        error: String,
    },
}

/// Result of publishing one content item to one destination.
///
/// A post id is present exactly when the publish succeeded, and an error
/// exactly when it failed.
///
/// # Examples
///
/// ```
/// use autopost_core::{DestinationKind, PublishOutcome};
///
/// let outcome = PublishOutcome::posted("42", "News", DestinationKind::Page, "42_1001");
/// assert!(outcome.success());
/// assert_eq!(outcome.post_id(), Some("42_1001"));
/// assert_eq!(outcome.error(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(into = "OutcomeRecord", try_from = "OutcomeRecord")]
pub struct PublishOutcome {
    /// Facebook ID of the destination
    destination_id: String,
    /// Configured name of the destination
    destination_name: String,
    /// Page or Group
    kind: DestinationKind,
    #[getter(skip)]
    status: PostStatus,
}

impl PublishOutcome {
    /// Record a successful post.
    pub fn posted(
        destination_id: impl Into<String>,
        destination_name: impl Into<String>,
        kind: DestinationKind,
        post_id: impl Into<String>,
    ) -> Self {
        Self {
            destination_id: destination_id.into(),
            destination_name: destination_name.into(),
            kind,
            status: PostStatus::Posted {
                post_id: post_id.into(),
            },
        }
    }

    /// Record a failed post.
    pub fn failed(
        destination_id: impl Into<String>,
        destination_name: impl Into<String>,
        kind: DestinationKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            destination_id: destination_id.into(),
            destination_name: destination_name.into(),
            kind,
            status: PostStatus::Failed {
                error: error.into(),
            },
        }
    }

    /// Outcome for `destination` with the given status.
    pub fn for_destination(destination: &Destination, status: PostStatus) -> Self {
        Self {
            destination_id: destination.id().clone(),
            destination_name: destination.display_name().clone(),
            kind: *destination.kind(),
            status,
        }
    }

    /// Whether the post was created.
    pub fn success(&self) -> bool {
        matches!(self.status, PostStatus::Posted { .. })
    }

    /// ID of the created post, if any.
    pub fn post_id(&self) -> Option<&str> {
        match &self.status {
            PostStatus::Posted { post_id } => Some(post_id),
            PostStatus::Failed { .. } => None,
        }
    }

    /// Failure text, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PostStatus::Posted { .. } => None,
            PostStatus::Failed { error } => Some(error),
        }
    }

    /// The full status.
    pub fn status(&self) -> &PostStatus {
        &self.status
    }
}

/// Flat wire form of an outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutcomeRecord {
    destination_id: String,
    destination_name: String,
    kind: DestinationKind,
    success: bool,
    post_id: Option<String>,
    error: Option<String>,
}

impl From<PublishOutcome> for OutcomeRecord {
    fn from(outcome: PublishOutcome) -> Self {
        let (success, post_id, error) = match outcome.status {
            PostStatus::Posted { post_id } => (true, Some(post_id), None),
            PostStatus::Failed { error } => (false, None, Some(error)),
        };
        Self {
            destination_id: outcome.destination_id,
            destination_name: outcome.destination_name,
            kind: outcome.kind,
            success,
            post_id,
            error,
        }
    }
}

impl TryFrom<OutcomeRecord> for PublishOutcome {
    type Error = String;

    fn try_from(record: OutcomeRecord) -> Result<Self, Self::Error> {
        let status = match (record.success, record.post_id, record.error) {
            (true, Some(post_id), None) => PostStatus::Posted { post_id },
            (false, None, Some(error)) => PostStatus::Failed { error },
            _ => {
                return Err(
                    "outcome must carry a post_id when successful and an error otherwise"
                        .to_string(),
                );
            }
        };
        Ok(Self {
            destination_id: record.destination_id,
            destination_name: record.destination_name,
            kind: record.kind,
            status,
        })
    }
}
