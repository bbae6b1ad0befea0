//! Generation-backend error types and failure classification.

/// Specific error conditions for generation-backend operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DriverErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create backend client
    #[display("Failed to create backend client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Backend API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response did not contain the expected payload
    #[display("Unexpected backend response: {}", _0)]
    UnexpectedResponse(String),
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Stream was interrupted
    #[display("Stream interrupted: {}", _0)]
    StreamInterrupted(String),
}

impl DriverErrorKind {
    /// Check if this error is a credential problem.
    ///
    /// Authorization failures are the one error class the pipeline does not
    /// absorb locally. Callers react by dropping the session's readiness flag
    /// and routing the user back to credential selection.
    pub fn is_authorization(&self) -> bool {
        match self {
            DriverErrorKind::MissingApiKey => true,
            DriverErrorKind::Http { status_code, .. } => matches!(*status_code, 401 | 403),
            _ => false,
        }
    }

    /// Check if this error is transient.
    ///
    /// Transient errors resolve into a stage-local default substitution; the
    /// pipeline never re-invokes the failed stage.
    pub fn is_transient(&self) -> bool {
        match self {
            DriverErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            DriverErrorKind::ApiRequest(_) => true,
            DriverErrorKind::StreamInterrupted(_) => true,
            DriverErrorKind::UnexpectedResponse(_) => true,
            _ => false,
        }
    }
}

/// Generation-backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use lumina_error::{DriverError, DriverErrorKind};
///
/// let err = DriverError::new(DriverErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.is_authorization());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Driver Error: {} at line {} in {}", kind, line, file)]
pub struct DriverError {
    /// The kind of error that occurred
    pub kind: DriverErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DriverError {
    /// Create a new DriverError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DriverErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check if this error is a credential problem.
    pub fn is_authorization(&self) -> bool {
        self.kind.is_authorization()
    }

    /// Check if this error is transient.
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}
