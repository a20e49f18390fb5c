//! Snapshot of the settings a publish run reads.

use crate::{Destination, FormatOptions};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the engine needs from configuration for one run.
///
/// # Examples
///
/// ```
/// use autopost_core::PublishConfig;
///
/// let config = PublishConfig::builder().enabled(true).build().expect("Valid config");
/// assert!(*config.enabled());
/// assert!(*config.detailed_logging());
/// assert!(config.destinations().is_empty());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PublishConfig {
    /// Global switch; when off, runs are skipped
    #[builder(default)]
    enabled: bool,
    /// Log each intermediate step at info level
    #[builder(default = "true")]
    detailed_logging: bool,
    /// Destinations in publish order
    #[builder(default)]
    destinations: Vec<Destination>,
    /// Message formatting options
    #[builder(default)]
    options: FormatOptions,
}

impl PublishConfig {
    /// Returns a builder for constructing a PublishConfig.
    pub fn builder() -> PublishConfigBuilder {
        PublishConfigBuilder::default()
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            detailed_logging: true,
            destinations: Vec::new(),
            options: FormatOptions::default(),
        }
    }
}
