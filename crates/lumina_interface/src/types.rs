//! Response and streaming types shared across drivers.

use futures_util::stream::Stream;
use lumina_core::SlideLayout;
use lumina_error::LuminaResult;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Layout and image-prompt plan for one slide.
///
/// Produced by visual planning and passed as context into content synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualPlan {
    /// Planned layout
    pub layout: SlideLayout,
    /// Prompt for the slide's visual
    pub image_prompt: String,
}

impl Default for VisualPlan {
    fn default() -> Self {
        Self {
            layout: SlideLayout::default(),
            image_prompt: String::new(),
        }
    }
}

/// One fragment of a streamed assistant reply.
///
/// `sources` holds the grounding URIs attached to this fragment, already
/// deduplicated by the driver; consumers fold fragments into a single
/// message buffer in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChatChunk {
    /// Text fragment, possibly empty
    pub text: String,
    /// Grounding source URIs for this fragment
    pub sources: Vec<String>,
}

/// Stream of assistant chat fragments.
pub type ChatStream = Pin<Box<dyn Stream<Item = LuminaResult<ChatChunk>> + Send>>;

/// Stream of plain text fragments.
pub type TextStream = Pin<Box<dyn Stream<Item = LuminaResult<String>> + Send>>;
