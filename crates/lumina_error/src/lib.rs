//! Error types for the Lumina library.
//!
//! This crate provides the foundation error types used throughout the Lumina
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lumina_error::{LuminaResult, DriverError, DriverErrorKind};
//!
//! fn fetch_outline() -> LuminaResult<String> {
//!     Err(DriverError::new(DriverErrorKind::ApiRequest("connection refused".into())))?
//! }
//!
//! match fetch_outline() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod driver;
mod error;
mod export;
mod pipeline;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use driver::{DriverError, DriverErrorKind};
pub use error::{LuminaError, LuminaErrorKind, LuminaResult};
pub use export::{ExportError, ExportErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
