//! Core data types for the Lumina presentation-synthesis library.
//!
//! This crate provides the domain model shared across all Lumina interfaces:
//! slides and decks, outline items, visual themes, and the session-level
//! option enums (language, export format, model tier, image size). It also
//! carries the JSON repair parser that hydrates model responses into these
//! types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod deck;
mod options;
mod outline;
mod sanitize;
mod slide;
mod theme;

pub use deck::Deck;
pub use options::{ExportFormat, ImageSize, Language, ModelTier, PresentationFormat};
pub use outline::{OutlineItem, custom_item_id, outline_item_id, stamp_millis};
pub use sanitize::parse_or_fallback;
pub use slide::{
    Callout, CalloutPosition, ChartKind, ChartRow, ComparisonItem, GridItem, ImageState,
    ProcessStep, Slide, SlideLayout, TimelineStep,
};
pub use theme::{AnalyzedStyle, DEFAULT_STYLE_ID, StylePalette, StylePreset, VisualTheme};
