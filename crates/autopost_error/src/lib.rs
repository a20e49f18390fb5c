//! Error types for the Autopost Facebook publishing library.
//!
//! Each concern has its own error struct that records where it was raised.
//! [`AutopostError`] unifies them for callers that cross crate boundaries.

#![warn(missing_docs)]

mod config;
mod content;
mod http;

pub use config::ConfigError;
pub use content::ContentError;
pub use http::{HttpError, HttpErrorKind};

/// Specific error conditions across the workspace.
#[derive(Debug, Clone, derive_more::From, derive_more::Display)]
pub enum AutopostErrorKind {
    /// Settings could not be loaded or are invalid
    #[display("{_0}")]
    Config(ConfigError),
    /// A content item could not be loaded
    #[display("{_0}")]
    Content(ContentError),
    /// The Graph API request failed
    #[display("{_0}")]
    Http(HttpError),
}

impl AutopostErrorKind {
    /// The underlying failure text, without location decoration.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost_error::{AutopostError, ConfigError};
    ///
    /// let err: AutopostError = ConfigError::new("settings file is empty").into();
    /// assert_eq!(err.kind().message(), "settings file is empty");
    /// ```
    pub fn message(&self) -> String {
        match self {
            Self::Config(e) => e.message.clone(),
            Self::Content(e) => e.message.clone(),
            Self::Http(e) => e.message(),
        }
    }
}

/// Autopost error wrapping a specific kind.
///
/// # Examples
///
/// ```
/// use autopost_error::{AutopostError, AutopostErrorKind, ConfigError};
///
/// let err: AutopostError = ConfigError::new("bad body_length").into();
/// assert!(matches!(err.kind(), AutopostErrorKind::Config(_)));
/// assert!(err.to_string().contains("bad body_length"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Autopost Error: {}", kind)]
pub struct AutopostError {
    kind: AutopostErrorKind,
}

impl AutopostError {
    /// Create a new AutopostError.
    pub fn new(kind: AutopostErrorKind) -> Self {
        Self { kind }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AutopostErrorKind {
        &self.kind
    }
}

impl<T> From<T> for AutopostError
where
    T: Into<AutopostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for autopost operations.
pub type AutopostResult<T> = Result<T, AutopostError>;
