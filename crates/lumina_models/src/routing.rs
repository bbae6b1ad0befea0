//! Model routing for the Gemini backend.

use derive_getters::Getters;
use lumina_core::ModelTier;
use serde::{Deserialize, Serialize};

/// Efficient text model, also the workhorse for auxiliary operations.
pub const TEXT_FLASH_MODEL: &str = "gemini-3-flash-preview";
/// High-fidelity text model used for content synthesis on the quality tier.
pub const TEXT_PRO_MODEL: &str = "gemini-3-pro-preview";
/// High-fidelity image model used on the quality tier.
pub const IMAGE_PRO_MODEL: &str = "gemini-3-pro-image-preview";
/// Efficient image model used on the efficient tier.
pub const IMAGE_FLASH_MODEL: &str = "gemini-2.5-flash-image";

/// Which model serves each operation class.
///
/// Content and image synthesis follow the request's [`ModelTier`]. Auxiliary
/// operations (outline, visual planning, chart insights, style analysis,
/// chat, brainstorm) always ride the efficient text model regardless of
/// tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ModelTable {
    /// Efficient text model
    text_flash: String,
    /// High-fidelity text model
    text_pro: String,
    /// High-fidelity image model
    image_pro: String,
    /// Efficient image model
    image_flash: String,
}

impl Default for ModelTable {
    fn default() -> Self {
        Self {
            text_flash: TEXT_FLASH_MODEL.to_string(),
            text_pro: TEXT_PRO_MODEL.to_string(),
            image_pro: IMAGE_PRO_MODEL.to_string(),
            image_flash: IMAGE_FLASH_MODEL.to_string(),
        }
    }
}

impl ModelTable {
    /// Model serving slide-content synthesis under the given tier.
    pub fn content(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Quality => &self.text_pro,
            ModelTier::Efficient => &self.text_flash,
        }
    }

    /// Model serving image synthesis under the given tier.
    pub fn image(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Quality => &self.image_pro,
            ModelTier::Efficient => &self.image_flash,
        }
    }

    /// Model serving every auxiliary operation.
    pub fn auxiliary(&self) -> &str {
        &self.text_flash
    }
}
