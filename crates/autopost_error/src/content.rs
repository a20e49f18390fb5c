//! Content item error types.

/// Error raised while loading a content item.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", message, line, file)]
pub struct ContentError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with the given message at the current location.
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
