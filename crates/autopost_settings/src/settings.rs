//! Persisted autopost settings.

use autopost_core::{Destination, DestinationKind, FormatOptions, PublishConfig};
use autopost_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Graph API root, including the pinned version.
pub const DEFAULT_GRAPH_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// File name looked up by [`default_settings_path`].
pub const SETTINGS_FILE_NAME: &str = "autopost.toml";

/// Prefix for environment overrides, e.g. `AUTOPOST__ENABLED=true`.
pub const ENV_PREFIX: &str = "AUTOPOST";

/// Name used for destinations configured without one.
const UNKNOWN_DESTINATION_NAME: &str = "Unknown";

/// Top-level settings loaded from TOML.
///
/// Every field may be omitted; see the `default_*` functions for the values
/// used in that case.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct AutopostSettings {
    /// Global switch for autoposting
    #[serde(default)]
    enabled: bool,
    /// Log every intermediate step at info level
    #[serde(default = "default_true")]
    detailed_logging: bool,
    /// Site domains allowed to trigger posting (empty = all)
    #[serde(default)]
    enabled_domains: Vec<String>,
    /// Content types that trigger posting (empty = all)
    #[serde(default = "default_content_types")]
    content_types: Vec<String>,
    /// Graph API root URL
    #[serde(default = "default_graph_api_base")]
    graph_api_base: String,
    /// Per-request timeout for Graph API calls
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
    /// Message formatting options
    #[serde(default)]
    post_options: FormatOptions,
    /// Configured Pages and Groups, in publish order
    #[serde(default)]
    pages: Vec<DestinationSettings>,
}

/// One destination row as stored in the settings file.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct DestinationSettings {
    /// `page` or `group`; anything else is treated as `page`
    #[serde(default, rename = "type")]
    kind: Option<String>,
    /// Friendly name
    #[serde(default)]
    page_name: Option<String>,
    /// Facebook Page or Group ID
    #[serde(default)]
    page_id: Option<String>,
    /// Access token for the destination
    #[serde(default)]
    access_token: Option<String>,
    /// Whether the destination is used
    #[serde(default = "default_true")]
    #[setters(skip)]
    enabled: bool,
}

impl Default for DestinationSettings {
    fn default() -> Self {
        Self {
            kind: None,
            page_name: None,
            page_id: None,
            access_token: None,
            enabled: true,
        }
    }
}

impl DestinationSettings {
    /// Returns a copy with the enabled flag set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether both the ID and the token are present.
    pub fn is_complete(&self) -> bool {
        has_text(&self.page_id) && has_text(&self.access_token)
    }

    /// Parsed destination kind.
    pub fn destination_kind(&self) -> DestinationKind {
        DestinationKind::from_config(self.kind.as_deref())
    }

    fn to_destination(&self) -> Destination {
        let name = self
            .page_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_DESTINATION_NAME);

        Destination::builder()
            .id(self.page_id.clone().unwrap_or_default())
            .display_name(name)
            .kind(self.destination_kind())
            .access_token(self.access_token.clone().unwrap_or_default())
            .enabled(self.enabled)
            .build()
            .expect("Destination with all fields set")
    }
}

impl Default for AutopostSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            detailed_logging: true,
            enabled_domains: Vec::new(),
            content_types: default_content_types(),
            graph_api_base: default_graph_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
            post_options: FormatOptions::default(),
            pages: Vec::new(),
        }
    }
}

impl AutopostSettings {
    /// Load settings from a TOML file, applying `AUTOPOST__*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, is not valid TOML, or does not
    /// match the settings schema.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read settings from {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let settings: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid settings in {}: {}", path.display(), e)))?;

        tracing::debug!(
            enabled = settings.enabled,
            destinations = settings.pages.len(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Parse settings from a TOML string, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not valid settings TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Invalid settings: {}", e)))
    }

    /// Drops destination rows without an ID or token.
    pub fn normalized(mut self) -> Self {
        let before = self.pages.len();
        self.pages.retain(DestinationSettings::is_complete);
        let dropped = before - self.pages.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Ignoring destinations without page_id or access_token");
        }
        self
    }

    /// The snapshot handed to the publish engine.
    ///
    /// Incomplete destination rows are left out.
    pub fn to_publish_config(&self) -> PublishConfig {
        let destinations = self
            .pages
            .iter()
            .filter(|page| page.is_complete())
            .map(DestinationSettings::to_destination)
            .collect::<Vec<_>>();

        PublishConfig::builder()
            .enabled(self.enabled)
            .detailed_logging(self.detailed_logging)
            .destinations(destinations)
            .options(self.post_options)
            .build()
            .expect("PublishConfig with all fields set")
    }
}

/// Where settings are read from when no path is given.
///
/// Prefers `./autopost.toml`, then `<config dir>/autopost/autopost.toml`.
pub fn default_settings_path() -> PathBuf {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("autopost").join(SETTINGS_FILE_NAME))
        .unwrap_or(local)
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn default_true() -> bool {
    true
}

fn default_content_types() -> Vec<String> {
    vec!["article".to_string()]
}

fn default_graph_api_base() -> String {
    DEFAULT_GRAPH_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
