//! Publishing destinations.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Whether a destination is a Facebook Page or Group.
///
/// Both kinds use the same Graph API call shapes; Groups need a user token
/// carrying the `publish_to_groups` permission.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DestinationKind {
    /// A Facebook Page
    #[default]
    Page,
    /// A Facebook Group
    Group,
}

impl DestinationKind {
    /// Interpret a configured `type` value.
    ///
    /// Only `group` selects [`DestinationKind::Group`]; anything else,
    /// including a missing value, is a Page.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost_core::DestinationKind;
    ///
    /// assert_eq!(DestinationKind::from_config(Some("group")), DestinationKind::Group);
    /// assert_eq!(DestinationKind::from_config(Some("GROUP")), DestinationKind::Page);
    /// assert_eq!(DestinationKind::from_config(None), DestinationKind::Page);
    /// ```
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("group") => Self::Group,
            _ => Self::Page,
        }
    }
}

/// A configured Page or Group to publish to.
///
/// # Examples
///
/// ```
/// use autopost_core::{Destination, DestinationKind};
///
/// let destination = Destination::builder()
///     .id("1234567890")
///     .display_name("Main page")
///     .kind(DestinationKind::Page)
///     .access_token("EAAB...")
///     .build()
///     .expect("Valid destination");
///
/// assert!(destination.enabled());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Destination {
    /// Facebook Page or Group ID
    id: String,
    /// Friendly name used in logs and outcomes
    #[builder(default = "default_display_name()")]
    #[serde(default = "default_display_name")]
    display_name: String,
    /// Page or Group
    #[builder(default)]
    #[serde(default)]
    kind: DestinationKind,
    /// Page token or user token with group publishing rights
    #[getter(skip)]
    #[serde(default, skip_serializing)]
    access_token: String,
    /// Disabled destinations are skipped without an outcome
    #[getter(skip)]
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    enabled: bool,
}

impl Destination {
    /// Returns a builder for constructing a Destination.
    pub fn builder() -> DestinationBuilder {
        DestinationBuilder::default()
    }

    /// Whether this destination takes part in publish runs.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The access token sent with every Graph API call.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

fn default_display_name() -> String {
    "Unknown".to_string()
}

fn default_true() -> bool {
    true
}
