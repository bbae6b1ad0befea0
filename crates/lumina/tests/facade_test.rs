//! Facade checks: the re-exported surface composes into a working pipeline.

use async_trait::async_trait;
use lumina::{
    AnalyzedStyle, Callout, ChartInsightRequest, DEFAULT_BASE_URL, DeckEditor, DeckPipeline,
    ExportFormat, GeminiConfig, GenerationSession, ImageRequest, ImageState, LuminaDriver,
    LuminaResult, ModelTable, ModelTier, OutlineItem, OutlineRequest, SessionState, Slide,
    SlideContentRequest, SlideLayout, SourceDocument, StylePreset, TEXT_PRO_MODEL, VisualPlan,
    VisualPlanRequest, assemble_doc_context, init_logging, outline_item_id, stamp_millis,
};

/// Canned driver exercising the pipeline without a generation backend.
#[derive(Debug, Default)]
struct InlineDriver;

#[async_trait]
impl LuminaDriver for InlineDriver {
    async fn synthesize_outline(&self, req: &OutlineRequest) -> LuminaResult<Vec<OutlineItem>> {
        let stamp = stamp_millis();
        Ok((0..*req.slide_count())
            .map(|i| OutlineItem {
                id: outline_item_id(stamp, i),
                title: format!("{} {}", req.topic(), i + 1),
                intent: "Key facts".to_string(),
            })
            .collect())
    }

    async fn plan_slide_visual(&self, req: &VisualPlanRequest) -> LuminaResult<VisualPlan> {
        Ok(VisualPlan {
            layout: SlideLayout::Image,
            image_prompt: format!("Visual for {}", req.item().title),
        })
    }

    async fn synthesize_slide_content(&self, req: &SlideContentRequest) -> LuminaResult<Slide> {
        let mut slide = Slide::stub(req.item().id.clone(), req.item().title.clone());
        slide.content_points = vec!["Inline point.".to_string()];
        Ok(slide)
    }

    async fn synthesize_image(&self, _req: &ImageRequest) -> LuminaResult<ImageState> {
        Ok(ImageState::Ready("data:image/png;base64,QUJD".to_string()))
    }

    async fn analyze_style_from_image(&self, _image_base64: &str) -> LuminaResult<AnalyzedStyle> {
        Ok(AnalyzedStyle::fallback("Inline"))
    }

    async fn analyze_style_from_text(&self, prompt: &str) -> LuminaResult<AnalyzedStyle> {
        Ok(AnalyzedStyle::fallback(prompt))
    }

    async fn suggest_chart_insights(
        &self,
        _req: &ChartInsightRequest,
    ) -> LuminaResult<Vec<Callout>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &'static str {
        "inline"
    }

    fn model_name(&self) -> &str {
        "inline-fixture"
    }
}

#[test]
fn facade_surface_composes() {
    let session = GenerationSession::builder()
        .topic("Port logistics")
        .build()
        .unwrap();
    assert_eq!(session.slide_count(), &8);
    assert!(session.theme().id.contains("corporate"));
    assert_eq!(StylePreset::catalog_for(ExportFormat::Pptx).len(), 5);

    let table = ModelTable::default();
    assert_eq!(table.content(ModelTier::Quality), TEXT_PRO_MODEL);

    let config = GeminiConfig::builder().build().unwrap();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);

    let context = assemble_doc_context(
        "Emphasize automation.",
        &[SourceDocument {
            name: "notes.txt".to_string(),
            content: "Cranes are electric.".to_string(),
        }],
    );
    assert!(context.starts_with("[Pasted Text]"));
    assert!(context.contains("[File: notes.txt]\nCranes are electric."));
}

#[tokio::test]
async fn inline_driver_runs_the_full_pipeline() {
    let session = GenerationSession::builder()
        .topic("Grid storage")
        .slide_count(2usize)
        .export_format(ExportFormat::Pdf)
        .build()
        .unwrap();
    let mut state = SessionState::new();
    state.mark_ready();
    let mut pipeline = DeckPipeline::new(InlineDriver, session, state.begin_run());

    let outline = pipeline.synthesize_outline().await.unwrap();
    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].title, "Grid storage 1");

    let mut editor = DeckEditor::default();
    pipeline.run(&outline, &mut editor).await.unwrap();

    assert!(pipeline.is_done());
    assert_eq!(pipeline.progress(), (2, 2));
    assert_eq!(editor.deck().len(), 2);
    for (item, slide) in outline.iter().zip(editor.deck().slides.iter()) {
        assert_eq!(slide.id, item.id);
        assert_eq!(slide.layout, SlideLayout::Image);
        assert!(slide.image.url().is_some());
        assert_eq!(slide.content_points, vec!["Inline point.".to_string()]);
    }
}

#[test]
fn logging_installs_exactly_once() {
    assert!(init_logging().is_ok());
    assert!(init_logging().is_err());
}
