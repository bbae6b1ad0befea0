//! Export adapter seam.

use lumina_core::{Deck, ExportFormat, VisualTheme};
use lumina_error::LuminaResult;
use uuid::Uuid;

/// A finished export: bytes plus the metadata a download needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Opaque artifact identifier
    pub id: Uuid,
    /// Suggested file name, extension included
    pub file_name: String,
    /// MIME type of the document
    pub mime_type: String,
    /// The serialized document
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Wrap serialized bytes with download metadata and a fresh id.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Serializes a finalized deck and theme into a downloadable document.
///
/// Rendering internals are out of scope for the deck engine; an adapter
/// consumes the deck read-only. Export failure leaves application state
/// unchanged and the caller may retry.
pub trait DeckExporter {
    /// The export medium this adapter produces.
    fn format(&self) -> ExportFormat;

    /// Serialize the deck under the theme.
    fn render(&self, deck: &Deck, theme: &VisualTheme) -> LuminaResult<ExportArtifact>;
}
