//! Deck-pipeline error types.

/// Specific error conditions for pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Outline has no items to generate from
    #[display("Cannot generate a deck from an empty outline")]
    EmptyOutline,
    /// The per-slide driver failed for one slide
    #[display("Slide {} generation failed: {}", index, message)]
    SlideGeneration {
        /// Zero-based slide index
        index: usize,
        /// Error message
        message: String,
    },
    /// A result arrived for a generation run that has been superseded
    #[display("Stale generation epoch: expected {}, got {}", current, stale)]
    StaleEpoch {
        /// The session's current epoch
        current: u64,
        /// The epoch the late result was produced under
        stale: u64,
    },
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use lumina_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyOutline);
/// assert!(format!("{}", err).contains("empty outline"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
