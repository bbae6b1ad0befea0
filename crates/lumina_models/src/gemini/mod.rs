//! Google Gemini backend.
//!
//! Text operations ride the `gemini-rust` SDK with per-model client
//! pooling. Image synthesis, image-input style analysis, and
//! search-grounded chat streaming go through the REST `generateContent`
//! surface directly, since the SDK does not cover them.

mod client;
mod dto;
mod prompts;

pub use client::GeminiDriver;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, GoogleSearch,
    GroundingChunk, GroundingMetadata, ImageConfig, InlineData, OutlineReply, Part, Tool,
    WebSource,
};

/// Result type for driver-internal operations.
pub(crate) type DriverResult<T> = std::result::Result<T, lumina_error::DriverError>;
