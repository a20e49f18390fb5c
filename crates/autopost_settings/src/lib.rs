//! Settings for the Autopost Facebook publishing library.
//!
//! Settings live in a TOML file read through the `config` crate, with
//! `AUTOPOST__*` environment variables layered on top:
//!
//! ```toml
//! enabled = true
//! enabled_domains = ["news.example.com"]
//!
//! [post_options]
//! include_image = true
//! include_body = true
//! body_length = 200
//!
//! [[pages]]
//! type = "page"
//! page_name = "Example News"
//! page_id = "1234567890"
//! access_token = "EAAB..."
//! ```

#![warn(missing_docs)]

mod settings;
mod source;
mod validation;

pub use settings::{
    AutopostSettings, DEFAULT_GRAPH_API_BASE, DestinationSettings, ENV_PREFIX, SETTINGS_FILE_NAME,
    default_settings_path,
};
pub use source::{FileConfigSource, StaticConfigSource};
pub use validation::{
    MAX_BODY_LENGTH, MIN_BODY_LENGTH, ValidationIssue, ValidationResult, clamp_body_length,
    validate_settings,
};
