//! Generation backends for the Lumina presentation-synthesis library.
//!
//! This crate provides the Gemini-backed [`GeminiDriver`], which implements
//! every operation of `lumina_interface::LuminaDriver` plus the streamed
//! `lumina_interface::Assistant` surface. Text operations ride the
//! `gemini-rust` SDK with per-model client pooling; image synthesis,
//! image-input style analysis, and search-grounded chat use the REST
//! endpoint directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumina_interface::{LuminaDriver, OutlineRequest};
//! use lumina_models::GeminiDriver;
//!
//! # async fn run() {
//! let driver = GeminiDriver::from_env().unwrap();
//! let request = OutlineRequest::builder()
//!     .topic("Offshore wind economics")
//!     .slide_count(8usize)
//!     .build()
//!     .unwrap();
//! let outline = driver.synthesize_outline(&request).await.unwrap();
//! assert_eq!(outline.len(), 8);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;
mod routing;

pub use config::{DEFAULT_BASE_URL, GeminiConfig, GeminiConfigBuilder};
pub use gemini::{
    Candidate, Content, GeminiDriver, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, GoogleSearch,
    GroundingChunk, GroundingMetadata, ImageConfig, InlineData, OutlineReply, Part, Tool,
    WebSource,
};
pub use routing::{
    IMAGE_FLASH_MODEL, IMAGE_PRO_MODEL, ModelTable, TEXT_FLASH_MODEL, TEXT_PRO_MODEL,
};
