//! Visual themes, analyzed styles, and the built-in preset catalog.

use crate::ExportFormat;
use serde::{Deserialize, Serialize};

/// Visual color/typography parameters applied uniformly across all slides.
///
/// Immutable once the pipeline starts; selected before generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTheme {
    /// Theme identifier
    pub id: String,
    /// Slide background color (hex)
    pub background_color: String,
    /// Body text color (hex)
    pub text_color: String,
    /// Accent color (hex)
    pub accent_color: String,
    /// Secondary surface color (hex)
    pub secondary_color: String,
    /// CSS-style font stack
    pub font_family: String,
    /// True for dark backgrounds
    pub is_dark: bool,
}

/// Color palette extracted by style analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePalette {
    /// Slide background color (hex)
    pub background_color: String,
    /// Body text color (hex)
    pub text_color: String,
    /// Accent color (hex)
    pub accent_color: String,
    /// Secondary surface color (hex)
    pub secondary_color: String,
    /// True for dark backgrounds
    pub is_dark: bool,
}

impl StylePalette {
    /// The neutral corporate palette used when analysis fails.
    pub fn corporate() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            text_color: "#1f2937".to_string(),
            accent_color: "#1e40af".to_string(),
            secondary_color: "#f3f4f6".to_string(),
            is_dark: false,
        }
    }
}

/// Result of style analysis over a reference image or free-text description.
///
/// The `description` feeds the planning and content prompts; the palette can
/// seed a custom [`VisualTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedStyle {
    /// Prompt-facing description of the style
    pub description: String,
    /// Extracted color palette
    pub colors: StylePalette,
}

impl AnalyzedStyle {
    /// Fallback analysis: the corporate palette with the given description.
    pub fn fallback(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            colors: StylePalette::corporate(),
        }
    }
}

/// Id of the preset selected when none is chosen.
pub const DEFAULT_STYLE_ID: &str = "corporate-light";

/// A named, built-in theme with a prompt-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    /// Preset identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description spliced into generation prompts
    pub description: String,
    /// The theme itself
    pub theme: VisualTheme,
    /// Swatch color for pickers
    pub preview_color: String,
}

impl StylePreset {
    fn make(
        id: &str,
        name: &str,
        description: &str,
        preview: &str,
        background: &str,
        text: &str,
        accent: &str,
        secondary: &str,
        font: &str,
        is_dark: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            preview_color: preview.to_string(),
            theme: VisualTheme {
                id: id.to_string(),
                background_color: background.to_string(),
                text_color: text.to_string(),
                accent_color: accent.to_string(),
                secondary_color: secondary.to_string(),
                font_family: font.to_string(),
                is_dark,
            },
        }
    }

    /// The full built-in catalog, in picker order.
    ///
    /// The first five presets render faithfully in the slide-deck container;
    /// the rest are page-oriented only.
    pub fn catalog() -> Vec<StylePreset> {
        vec![
            StylePreset::make(
                "corporate-light",
                "Corporate Light",
                "Clean, professional, white background with deep blue accents. Minimalist and readable.",
                "#ffffff",
                "#FFFFFF",
                "#1f2937",
                "#1e40af",
                "#f3f4f6",
                "Inter, sans-serif",
                false,
            ),
            StylePreset::make(
                "corporate-dark",
                "Tech Dark",
                "Modern dark mode, sleek, high contrast with neon purple accents. Technology focused.",
                "#18181b",
                "#18181b",
                "#f4f4f5",
                "#8b5cf6",
                "#27272a",
                "Inter, sans-serif",
                true,
            ),
            StylePreset::make(
                "nature-forest",
                "Forest Green",
                "Eco-friendly, calming green tones, off-white background. Sustainable and organic.",
                "#ecfdf5",
                "#ecfdf5",
                "#064e3b",
                "#059669",
                "#d1fae5",
                "Inter, sans-serif",
                false,
            ),
            StylePreset::make(
                "slate-minimal",
                "Slate Minimal",
                "Serious, slate grey monochrome, very structured and austere. Financial and data-heavy.",
                "#f8fafc",
                "#f8fafc",
                "#0f172a",
                "#475569",
                "#e2e8f0",
                "Inter, sans-serif",
                false,
            ),
            StylePreset::make(
                "navy-gold",
                "Executive Navy",
                "Premium, deep navy background with gold/yellow accents. Trustworthy and executive.",
                "#172554",
                "#172554",
                "#ffffff",
                "#facc15",
                "#1e3a8a",
                "Inter, sans-serif",
                true,
            ),
            StylePreset::make(
                "sunset-warm",
                "Warm Sunset",
                "Warm gradients, orange and red tones. Energetic, creative, and bold.",
                "#fff7ed",
                "#fff7ed",
                "#7c2d12",
                "#ea580c",
                "#ffedd5",
                "Inter, sans-serif",
                false,
            ),
            StylePreset::make(
                "luxury-serif",
                "Luxury Serif",
                "High-end fashion style, serif fonts, stark black and white. Elegant and timeless.",
                "#000000",
                "#000000",
                "#FFFFFF",
                "#e5e5e5",
                "#262626",
                "Times New Roman, serif",
                true,
            ),
            StylePreset::make(
                "vibrant-pop",
                "Vibrant Pop",
                "Punchy pinks and cyans. Youthful, startup-vibe, and attention-grabbing.",
                "#fdf2f8",
                "#fdf2f8",
                "#831843",
                "#db2777",
                "#fce7f3",
                "Inter, sans-serif",
                false,
            ),
            StylePreset::make(
                "retro-paper",
                "Retro Paper",
                "Vintage paper texture color, brown text. Academic, historical, or craft feeling.",
                "#fef3c7",
                "#fef3c7",
                "#451a03",
                "#d97706",
                "#fde68a",
                "Courier New, monospace",
                false,
            ),
            StylePreset::make(
                "swiss-grid",
                "Swiss Grid",
                "International typographic style. Red and White. Clean, grid-based, objective.",
                "#ef4444",
                "#ef4444",
                "#ffffff",
                "#ffffff",
                "#f87171",
                "Arial, sans-serif",
                true,
            ),
        ]
    }

    /// Presets available for the given export medium.
    ///
    /// The slide-deck container only supports the first five palettes.
    pub fn catalog_for(format: ExportFormat) -> Vec<StylePreset> {
        let mut presets = StylePreset::catalog();
        if format == ExportFormat::Pptx {
            presets.truncate(5);
        }
        presets
    }

    /// Look up a preset by id, falling back to the default preset.
    pub fn by_id_or_default(id: &str) -> StylePreset {
        let mut catalog = StylePreset::catalog();
        let position = catalog
            .iter()
            .position(|preset| preset.id == id)
            .unwrap_or(0);
        catalog.swap_remove(position)
    }
}
