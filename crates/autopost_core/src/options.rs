//! Message formatting options.

use serde::{Deserialize, Serialize};

/// Default number of body characters included in a post.
pub const DEFAULT_BODY_LENGTH: i64 = 200;

/// Global options controlling how messages are composed.
///
/// `body_length` is stored as configured; values outside the settings
/// range are tolerated and a non-positive length yields an empty excerpt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct FormatOptions {
    /// Attach the content image when one resolves
    #[serde(default = "default_true")]
    include_image: bool,
    /// Include a plain-text excerpt of the body
    #[serde(default = "default_true")]
    include_body: bool,
    /// Maximum excerpt length in characters
    #[serde(default = "default_body_length")]
    body_length: i64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_image: true,
            include_body: true,
            body_length: DEFAULT_BODY_LENGTH,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_body_length() -> i64 {
    DEFAULT_BODY_LENGTH
}
