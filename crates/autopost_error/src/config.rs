//! Configuration error types.

/// Settings could not be read, parsed or validated.
///
/// Records where it was raised; [`Display`](std::fmt::Display) includes the
/// location, `message` does not.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost_error::ConfigError;
    ///
    /// let err = ConfigError::new("post_options.body_length must be between 50 and 1000");
    /// assert_eq!(err.message, "post_options.body_length must be between 50 and 1000");
    /// assert!(err.to_string().starts_with("Configuration Error: post_options.body_length"));
    /// assert!(err.line > 0);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
