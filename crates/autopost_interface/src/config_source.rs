//! Source of publish settings.

use autopost_core::PublishConfig;
use autopost_error::AutopostResult;
use std::sync::Arc;

/// Supplies the settings for a publish run.
///
/// `load` is called once per run so that edits take effect without
/// restarting the host.
pub trait ConfigSource: Send + Sync {
    /// Reads the current settings.
    ///
    /// # Errors
    ///
    /// Returns error if the settings cannot be read or parsed.
    fn load(&self) -> AutopostResult<PublishConfig>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn load(&self) -> AutopostResult<PublishConfig> {
        (**self).load()
    }
}
