//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, DriverError, ExportError, PipelineError};

/// This is the foundation error enum for the Lumina workspace.
///
/// # Examples
///
/// ```
/// use lumina_error::{LuminaError, ConfigError};
///
/// let cfg_err = ConfigError::new("Missing endpoint");
/// let err: LuminaError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LuminaErrorKind {
    /// Generation-backend error
    #[from(DriverError)]
    Driver(DriverError),
    /// Deck-pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Export-adapter error
    #[from(ExportError)]
    Export(ExportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request-builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Lumina error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lumina_error::{LuminaResult, DriverError, DriverErrorKind};
///
/// fn might_fail() -> LuminaResult<()> {
///     Err(DriverError::new(DriverErrorKind::MissingApiKey))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => assert!(e.is_authorization()),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lumina Error: {}", _0)]
pub struct LuminaError(Box<LuminaErrorKind>);

impl LuminaError {
    /// Create a new error from a kind.
    pub fn new(kind: LuminaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LuminaErrorKind {
        &self.0
    }

    /// Check if this error is a credential problem.
    ///
    /// The session layer flips its readiness flag off when this returns true,
    /// forcing the user back through credential selection.
    pub fn is_authorization(&self) -> bool {
        match self.kind() {
            LuminaErrorKind::Driver(e) => e.is_authorization(),
            _ => false,
        }
    }

    /// Check if this error is transient.
    pub fn is_transient(&self) -> bool {
        match self.kind() {
            LuminaErrorKind::Driver(e) => e.is_transient(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to LuminaErrorKind
impl<T> From<T> for LuminaError
where
    T: Into<LuminaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lumina operations.
///
/// # Examples
///
/// ```
/// use lumina_error::{LuminaResult, ExportError, ExportErrorKind};
///
/// fn render() -> LuminaResult<Vec<u8>> {
///     Err(ExportError::new(ExportErrorKind::Render("disk full".into())))?
/// }
/// ```
pub type LuminaResult<T> = std::result::Result<T, LuminaError>;
