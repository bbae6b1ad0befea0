//! Driver and exporter traits for the Lumina presentation-synthesis library.
//!
//! The generation backend and the export serializers are external
//! collaborators. This crate defines the seams they plug into: the
//! [`LuminaDriver`] trait for every generation capability the deck engine
//! consumes, the [`Assistant`] trait for the streamed chat/brainstorm
//! surface, and the [`DeckExporter`] trait for document serialization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod requests;
mod traits;
mod types;

pub use export::{DeckExporter, ExportArtifact};
pub use requests::{
    ChartInsightRequest, ChartInsightRequestBuilder, ImageRequest, ImageRequestBuilder,
    OutlineRequest, OutlineRequestBuilder, SlideContentRequest, SlideContentRequestBuilder,
    VisualPlanRequest, VisualPlanRequestBuilder,
};
pub use traits::{Assistant, LuminaDriver};
pub use types::{ChatChunk, ChatStream, TextStream, VisualPlan};
