//! Export-adapter error types.

/// Specific error conditions for deck export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Serializing the deck into the target container failed
    #[display("Failed to render export document: {}", _0)]
    Render(String),
    /// The adapter does not handle the requested format
    #[display("Export format not supported by this adapter: {}", _0)]
    UnsupportedFormat(String),
}

/// Export error with source location tracking.
///
/// Export failures leave application state unchanged; the caller surfaces a
/// notification and may retry manually.
///
/// # Examples
///
/// ```
/// use lumina_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Render("zip write failed".into()));
/// assert!(format!("{}", err).contains("zip write failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The specific error condition
    pub kind: ExportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
