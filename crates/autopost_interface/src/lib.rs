//! Trait definitions for the Autopost Facebook publishing library.
//!
//! The publish engine depends only on these capabilities, keeping it free
//! of any particular CMS, settings store or HTTP stack:
//! - [`ContentView`] - the item being published
//! - [`ConfigSource`] - destinations and formatting options
//! - [`HttpPoster`] - form-encoded POST requests

#![warn(missing_docs)]

mod config_source;
mod content;
mod http_poster;

pub use config_source::ConfigSource;
pub use content::ContentView;
pub use http_poster::{HttpPoster, HttpResponse};
