//! Exercises the export seam with a minimal JSON adapter.

use lumina_core::{DEFAULT_STYLE_ID, Deck, ExportFormat, OutlineItem, StylePreset, VisualTheme};
use lumina_error::{ExportError, ExportErrorKind, LuminaResult};
use lumina_interface::{DeckExporter, ExportArtifact};

/// Page-oriented test adapter that serializes the deck as JSON.
struct JsonExporter;

impl DeckExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, deck: &Deck, theme: &VisualTheme) -> LuminaResult<ExportArtifact> {
        let payload = serde_json::json!({
            "theme": theme.id,
            "slides": deck.slides,
        });
        let bytes = serde_json::to_vec_pretty(&payload)
            .map_err(|e| ExportError::new(ExportErrorKind::Render(e.to_string())))?;
        Ok(ExportArtifact::new("deck.json", "application/json", bytes))
    }
}

fn sample_deck() -> Deck {
    let outline = vec![
        OutlineItem {
            id: "slide-1712000000000-0".to_string(),
            title: "Intro".to_string(),
            intent: "Set the stage".to_string(),
        },
        OutlineItem {
            id: "slide-1712000000000-1".to_string(),
            title: "Findings".to_string(),
            intent: "Key results".to_string(),
        },
    ];
    Deck::stub_from_outline(&outline)
}

#[test]
fn rendered_artifact_carries_download_metadata() {
    let deck = sample_deck();
    let theme = StylePreset::by_id_or_default(DEFAULT_STYLE_ID).theme;
    let exporter = JsonExporter;

    let artifact = exporter.render(&deck, &theme).unwrap();

    assert_eq!(artifact.file_name, "deck.json");
    assert_eq!(artifact.mime_type, "application/json");
    let payload: serde_json::Value = serde_json::from_slice(&artifact.bytes).unwrap();
    assert_eq!(payload["theme"], DEFAULT_STYLE_ID);
    assert_eq!(payload["slides"].as_array().unwrap().len(), 2);
    assert_eq!(payload["slides"][0]["title"], "Intro");
}

#[test]
fn artifact_ids_are_unique_per_render() {
    let deck = sample_deck();
    let theme = StylePreset::by_id_or_default(DEFAULT_STYLE_ID).theme;
    let exporter = JsonExporter;

    let first = exporter.render(&deck, &theme).unwrap();
    let second = exporter.render(&deck, &theme).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn adapter_reports_its_medium() {
    assert!(JsonExporter.format().is_image_centric());
}
