//! Autopost: publish site content to Facebook Pages and Groups.
//!
//! This crate ties the workspace together:
//! - [`ContentItem`] - a content item read from JSON, with image resolution
//! - [`TriggerFilter`] - content type and domain allow-lists
//! - [`cli`] - the `autopost` command-line front end
//!
//! and re-exports the pieces most embedders need:
//!
//! ```no_run
//! use autopost::{ContentItem, FileConfigSource, GraphClient, PublishEngine, DEFAULT_TIMEOUT};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = PublishEngine::new(
//!     FileConfigSource::new("autopost.toml"),
//!     GraphClient::new(DEFAULT_TIMEOUT)?,
//! );
//! let item = ContentItem::from_file("item.json")?;
//! let run = engine.publish(&item).await;
//! println!("{} of {} destinations succeeded", run.succeeded().count(), run.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cli;
mod content;
mod observability;
mod trigger;

pub use content::{ContentItem, DEFAULT_CONTENT_TYPE, resolve_image};
pub use observability::init_tracing;
pub use trigger::TriggerFilter;

pub use autopost_core::{
    Destination, DestinationKind, FormatOptions, NO_POST_ID_ERROR, PostStatus, PublishConfig,
    PublishOutcome, PublishRun, SkipReason,
};
pub use autopost_error::{
    AutopostError, AutopostErrorKind, AutopostResult, ConfigError, ContentError, HttpError,
    HttpErrorKind,
};
pub use autopost_interface::{ConfigSource, ContentView, HttpPoster, HttpResponse};
pub use autopost_settings::{
    AutopostSettings, DestinationSettings, FileConfigSource, StaticConfigSource,
    ValidationResult, default_settings_path, validate_settings,
};
pub use autopost_social::{
    DEFAULT_TIMEOUT, GraphClient, GraphEndpoint, PublishEngine, compose_message,
};
