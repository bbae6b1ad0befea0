//! Deck generation, history, and editing for Lumina.
//!
//! This crate orchestrates the staged pipeline that turns an agreed outline
//! into a fully populated deck, and owns the state the user interacts with
//! afterwards: snapshot history, undo/redo, and index-addressed slide edits.
//!
//! # Features
//!
//! - **Staged pipeline**: one snapshot per completed stage, so partial decks
//!   are always visible and undoable
//! - **Medium-aware branching**: page-oriented runs plan visuals before
//!   content, slide-deck runs only synthesize images the content asked for
//! - **Snapshot history**: bounded full-state undo log with redo
//! - **Run identity**: epoch guards silence late results after a restart
//!
//! # Example
//!
//! ```rust,ignore
//! use lumina_deck::{DeckEditor, DeckPipeline, GenerationSession, SessionState};
//! use lumina_models::GeminiDriver;
//!
//! # async fn example() -> lumina_error::LuminaResult<()> {
//! let session = GenerationSession::builder()
//!     .topic("Container shipping in 2030")
//!     .build()?;
//! let mut state = SessionState::new();
//! state.mark_ready();
//!
//! let driver = GeminiDriver::from_env()?;
//! let mut pipeline = DeckPipeline::new(driver, session, state.begin_run());
//! let outline = pipeline.synthesize_outline().await?;
//!
//! let mut editor = DeckEditor::default();
//! pipeline.run(&outline, &mut editor).await?;
//! println!("Generated {} slides", editor.deck().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod editor;
mod history;
mod outline;
mod pipeline;
mod session;

pub use editor::{DeckEditor, SlidePatch};
pub use history::{DeckHistory, HISTORY_CAP};
pub use outline::OutlineEditor;
pub use pipeline::DeckPipeline;
pub use session::{
    EpochGuard, GenerationEpoch, GenerationSession, GenerationSessionBuilder, SessionState,
    SourceDocument, assemble_doc_context,
};
