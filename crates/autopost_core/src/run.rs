//! Publish runs.

use crate::PublishOutcome;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Why a run produced no outcomes without attempting any destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Autoposting is globally disabled
    #[display("autoposting is disabled")]
    Disabled,
    /// No destinations are configured
    #[display("no destinations configured")]
    NoDestinations,
    /// Settings could not be loaded
    #[display("settings unavailable: {_0}")]
    ConfigUnavailable(String),
}

/// Ordered outcomes of publishing one content item.
///
/// # Examples
///
/// ```
/// use autopost_core::{DestinationKind, PublishOutcome, PublishRun};
///
/// let mut run = PublishRun::new();
/// run.push(PublishOutcome::posted("1", "A", DestinationKind::Page, "1_9"));
/// run.push(PublishOutcome::failed("2", "B", DestinationKind::Group, "timeout"));
///
/// assert_eq!(run.succeeded().count(), 1);
/// assert_eq!(run.failed().count(), 1);
/// assert!(!run.all_succeeded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PublishRun {
    /// When the run started
    started_at: DateTime<Utc>,
    /// Outcomes in destination order
    outcomes: Vec<PublishOutcome>,
    /// Set when the run was skipped before any destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skipped: Option<SkipReason>,
}

impl PublishRun {
    /// Starts an empty run.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            outcomes: Vec::new(),
            skipped: None,
        }
    }

    /// An empty run that never reached the destinations.
    pub fn skip(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::new()
        }
    }

    /// Appends an outcome, keeping destination order.
    pub fn push(&mut self, outcome: PublishOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no destination was attempted.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes that created a post.
    pub fn succeeded(&self) -> impl Iterator<Item = &PublishOutcome> {
        self.outcomes.iter().filter(|o| o.success())
    }

    /// Outcomes that did not create a post.
    pub fn failed(&self) -> impl Iterator<Item = &PublishOutcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }

    /// True when every attempted destination succeeded (vacuously for an empty run).
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(PublishOutcome::success)
    }
}

impl Default for PublishRun {
    fn default() -> Self {
        Self::new()
    }
}
