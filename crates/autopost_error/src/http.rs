//! HTTP error types.

/// HTTP failure conditions surfaced by the Graph API client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The request never produced a response (connection, DNS, timeout).
    #[display("{_0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[display("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message reported by the server, or the raw body
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[display("Failed to build HTTP client: {_0}")]
    ClientBuild(String),
}

/// HTTP error with source location tracking.
///
/// # Examples
///
/// ```
/// use autopost_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::Transport("Connection refused".to_string()));
/// assert_eq!(err.kind().to_string(), "Connection refused");
/// assert!(err.to_string().contains("Connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    kind: HttpErrorKind,
    line: u32,
    file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HttpErrorKind {
        &self.kind
    }

    /// The underlying failure text, without location decoration.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<HttpErrorKind> for HttpError {
    #[track_caller]
    fn from(kind: HttpErrorKind) -> Self {
        Self::new(kind)
    }
}
