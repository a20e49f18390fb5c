//! [`ConfigSource`] implementations.

use crate::AutopostSettings;
use autopost_core::PublishConfig;
use autopost_error::AutopostResult;
use autopost_interface::ConfigSource;
use std::path::{Path, PathBuf};

/// Reads settings from a TOML file on every load.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> AutopostResult<PublishConfig> {
        let settings = AutopostSettings::from_file(&self.path)?;
        Ok(settings.normalized().to_publish_config())
    }
}

/// Serves a fixed configuration.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct StaticConfigSource {
    config: PublishConfig,
}

impl StaticConfigSource {
    /// Creates a source that always returns `config`.
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }
}

impl From<&AutopostSettings> for StaticConfigSource {
    fn from(settings: &AutopostSettings) -> Self {
        Self::new(settings.to_publish_config())
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> AutopostResult<PublishConfig> {
        Ok(self.config.clone())
    }
}
