//! Session-level option enums.

use serde::{Deserialize, Serialize};

/// Output language for generated text.
///
/// The display value is spliced directly into prompts, so variants render
/// capitalized.
///
/// # Examples
///
/// ```
/// use lumina_core::Language;
///
/// assert_eq!(format!("{}", Language::English), "English");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Language {
    /// English output
    English,
    /// Chinese output
    Chinese,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

/// Target export medium.
///
/// The medium drives the per-slide generation order: page-oriented documents
/// are image-centric (plan, image, content), slide-deck containers are
/// text-centric (content first, image only when prompted).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Slide-deck container (text-centric generation)
    Pptx,
    /// Page-oriented document (image-centric generation)
    Pdf,
}

impl ExportFormat {
    /// True when generation leads with the visual plan and image.
    pub fn is_image_centric(&self) -> bool {
        matches!(self, ExportFormat::Pdf)
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Pdf
    }
}

/// Content-depth mode for slide text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PresentationFormat {
    /// Self-contained slides with full text
    Detailed,
    /// Minimal on-slide text, detail in speaker notes
    Presenter,
}

impl Default for PresentationFormat {
    fn default() -> Self {
        Self::Presenter
    }
}

/// Caller-selected quality/speed trade-off.
///
/// The tier picks which underlying model variant serves content and image
/// synthesis; auxiliary operations always ride the efficient variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTier {
    /// Faster, cheaper variant
    Efficient,
    /// Slower, higher-fidelity variant
    Quality,
}

impl Default for ModelTier {
    fn default() -> Self {
        Self::Quality
    }
}

/// Requested image resolution tier.
///
/// # Examples
///
/// ```
/// use lumina_core::ImageSize;
///
/// assert_eq!(format!("{}", ImageSize::Size1K), "1K");
/// assert_eq!(serde_json::to_string(&ImageSize::Size2K).unwrap(), "\"2K\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ImageSize {
    /// 1K preview resolution
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    Size1K,
    /// 2K resolution
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    Size2K,
    /// 4K resolution
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    Size4K,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::Size1K
    }
}
