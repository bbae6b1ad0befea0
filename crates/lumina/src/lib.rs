//! Lumina - Slide-Deck Synthesis Engine
//!
//! Lumina turns a topic and optional source documents into a themed slide
//! deck through a staged pipeline: outline first, then per-slide visual
//! planning, image synthesis, and content generation. Every completed stage
//! commits an undoable snapshot, so partial decks stay editable while later
//! slides are still arriving.
//!
//! # Features
//!
//! - **Staged Pipeline**: outline, plan, image, and content stages with a snapshot after each
//! - **Driver Seam**: a single `LuminaDriver` trait so generation backends swap freely
//! - **Gemini Backend**: SDK-pooled text synthesis plus REST image, style, and chat calls
//! - **Editing and History**: patch-based slide edits with a capped undo/redo history
//! - **Grounded Chat**: streamed assistant replies carrying deduplicated web sources
//! - **Export Seam**: renderer-agnostic `DeckExporter` trait producing download artifacts
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumina::{DeckEditor, DeckPipeline, GeminiDriver, GenerationSession, SessionState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     lumina::init_logging()?;
//!
//!     let driver = GeminiDriver::from_env()?;
//!     let session = GenerationSession::builder()
//!         .topic("Container shipping in 2030")
//!         .slide_count(6usize)
//!         .build()?;
//!
//!     let mut state = SessionState::new();
//!     state.mark_ready();
//!     let mut pipeline = DeckPipeline::new(driver, session, state.begin_run());
//!
//!     let outline = pipeline.synthesize_outline().await?;
//!     let mut editor = DeckEditor::default();
//!     pipeline.run(&outline, &mut editor).await?;
//!     println!("{} slides ready", editor.deck().len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Lumina is organized as a workspace with focused crates:
//!
//! - `lumina_core` - Deck, slide, outline, and theme types
//! - `lumina_interface` - Driver, assistant, and exporter traits with request types
//! - `lumina_error` - Error types
//! - `lumina_deck` - Generation pipeline, editing, and undo/redo history
//! - `lumina_models` - Gemini driver implementation
//!
//! This crate (`lumina`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod logging;

pub use logging::init_logging;
pub use lumina_core::*;
pub use lumina_deck::*;
pub use lumina_error::*;
pub use lumina_interface::*;
pub use lumina_models::*;
