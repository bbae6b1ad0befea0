// Pipeline snapshot cadence and failure-path tests using MockDriver.
//
// These validate the staged generation flow without a generation backend:
// per-medium stage order, one snapshot per completed stage, and the abort
// paths for authorization failures and superseded runs.

mod test_utils;

use lumina_core::{ExportFormat, ImageState, SlideLayout};
use lumina_deck::{DeckEditor, DeckPipeline, GenerationSession, SessionState};
use lumina_error::{LuminaErrorKind, PipelineErrorKind};
use test_utils::{MockBehavior, MockDriver, fixed_outline};

fn session(format: ExportFormat) -> GenerationSession {
    GenerationSession::builder()
        .topic("Mock harbors")
        .export_format(format)
        .build()
        .unwrap()
}

#[tokio::test]
async fn page_medium_commits_three_snapshots_per_slide() {
    let mut state = SessionState::new();
    state.mark_ready();
    let mut pipeline = DeckPipeline::new(
        MockDriver::new(),
        session(ExportFormat::Pdf),
        state.begin_run(),
    );
    let outline = fixed_outline(3);
    let mut editor = DeckEditor::default();

    pipeline.run(&outline, &mut editor).await.unwrap();

    // Stub seed, then plan, image, and content per slide.
    assert_eq!(editor.history().len(), 10);
    assert!(pipeline.is_done());
    assert_eq!(pipeline.progress(), (3, 3));
    assert_eq!(
        pipeline.driver().log(),
        vec![
            "plan", "image", "content", "plan", "image", "content", "plan", "image", "content"
        ]
    );

    for (i, slide) in editor.deck().slides.iter().enumerate() {
        assert_eq!(slide.id, outline[i].id);
        assert_eq!(slide.layout, SlideLayout::Image);
        assert!(slide.image.url().is_some());
        assert!(!slide.content_points.is_empty());
        assert_eq!(
            slide.image_prompt.as_deref(),
            Some(format!("Visual for Slide {}", i + 1).as_str())
        );
    }
}

#[tokio::test]
async fn stub_deck_is_the_first_snapshot() {
    let mut state = SessionState::new();
    state.mark_ready();
    let mut pipeline = DeckPipeline::new(
        MockDriver::new(),
        session(ExportFormat::Pdf),
        state.begin_run(),
    );
    let outline = fixed_outline(2);
    let mut editor = DeckEditor::default();

    pipeline.run(&outline, &mut editor).await.unwrap();

    let first = &editor.history().snapshots()[0];
    assert_eq!(first.len(), 2);
    for (i, slide) in first.slides.iter().enumerate() {
        assert_eq!(slide.id, format!("slide-{}-{i}", test_utils::STAMP));
        assert_eq!(slide.title, format!("Slide {}", i + 1));
        assert!(slide.image.is_not_attempted());
        assert!(slide.content_points.is_empty());
    }

    // Ids never change across the whole run.
    for deck in editor.history().snapshots() {
        for (i, slide) in deck.slides.iter().enumerate() {
            assert_eq!(slide.id, outline[i].id);
        }
    }
}

#[tokio::test]
async fn deck_medium_commits_content_then_image() {
    let mut state = SessionState::new();
    state.mark_ready();
    let mut pipeline = DeckPipeline::new(
        MockDriver::new(),
        session(ExportFormat::Pptx),
        state.begin_run(),
    );
    let outline = fixed_outline(2);
    let mut editor = DeckEditor::default();

    pipeline.run(&outline, &mut editor).await.unwrap();

    assert_eq!(editor.history().len(), 5);
    assert_eq!(
        pipeline.driver().log(),
        vec!["content", "image", "content", "image"]
    );
    for slide in &editor.deck().slides {
        assert!(slide.image.url().is_some());
    }
}

#[tokio::test]
async fn deck_medium_skips_images_without_prompts() {
    let mut state = SessionState::new();
    state.mark_ready();
    let driver = MockDriver::with_behavior(MockBehavior {
        omit_image_prompts: true,
        ..MockBehavior::default()
    });
    let mut pipeline = DeckPipeline::new(driver, session(ExportFormat::Pptx), state.begin_run());
    let outline = fixed_outline(2);
    let mut editor = DeckEditor::default();

    pipeline.run(&outline, &mut editor).await.unwrap();

    assert_eq!(editor.history().len(), 3);
    assert_eq!(pipeline.driver().log(), vec!["content", "content"]);
    for slide in &editor.deck().slides {
        assert!(slide.image.is_not_attempted());
    }
}

#[tokio::test]
async fn failed_images_are_recorded_not_fatal() {
    let mut state = SessionState::new();
    state.mark_ready();
    let driver = MockDriver::with_behavior(MockBehavior {
        images_fail: true,
        ..MockBehavior::default()
    });
    let mut pipeline = DeckPipeline::new(driver, session(ExportFormat::Pdf), state.begin_run());
    let outline = fixed_outline(2);
    let mut editor = DeckEditor::default();

    pipeline.run(&outline, &mut editor).await.unwrap();

    assert!(pipeline.is_done());
    assert_eq!(editor.history().len(), 7);
    for slide in &editor.deck().slides {
        assert_eq!(slide.image, ImageState::Failed);
        assert!(!slide.content_points.is_empty());
    }
}

#[tokio::test]
async fn empty_outline_is_rejected_before_any_snapshot() {
    let mut state = SessionState::new();
    state.mark_ready();
    let mut pipeline = DeckPipeline::new(
        MockDriver::new(),
        session(ExportFormat::Pdf),
        state.begin_run(),
    );
    let mut editor = DeckEditor::default();

    let err = pipeline.run(&[], &mut editor).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        LuminaErrorKind::Pipeline(p) if matches!(p.kind, PipelineErrorKind::EmptyOutline)
    ));
    assert!(editor.history().is_empty());
    assert!(!pipeline.is_done());
}

#[tokio::test]
async fn authorization_failure_aborts_and_revokes_readiness() {
    let mut state = SessionState::new();
    state.mark_ready();
    // Slide 0 consumes calls 1-3 (plan, image, content); call 4 is the
    // second slide's plan.
    let driver = MockDriver::with_behavior(MockBehavior {
        auth_fail_at: Some(4),
        ..MockBehavior::default()
    });
    let mut pipeline = DeckPipeline::new(driver, session(ExportFormat::Pdf), state.begin_run());
    let outline = fixed_outline(3);
    let mut editor = DeckEditor::default();

    let err = pipeline.run(&outline, &mut editor).await.unwrap_err();
    assert!(err.is_authorization());
    assert!(!pipeline.is_done());
    assert_eq!(pipeline.progress(), (1, 3));

    // The completed slide's snapshots survive the abort.
    assert_eq!(editor.history().len(), 4);
    assert!(editor.deck().slides[0].image.url().is_some());
    assert!(editor.deck().slides[1].content_points.is_empty());

    assert!(state.note_failure(&err));
    assert!(!*state.ready());
}

#[tokio::test]
async fn transport_escape_is_wrapped_with_slide_index() {
    let mut state = SessionState::new();
    state.mark_ready();
    let driver = MockDriver::with_behavior(MockBehavior {
        transport_fail_at: Some(4),
        ..MockBehavior::default()
    });
    let mut pipeline = DeckPipeline::new(driver, session(ExportFormat::Pdf), state.begin_run());
    let outline = fixed_outline(2);
    let mut editor = DeckEditor::default();

    let err = pipeline.run(&outline, &mut editor).await.unwrap_err();
    assert!(!err.is_authorization());
    assert!(matches!(
        err.kind(),
        LuminaErrorKind::Pipeline(p)
            if matches!(p.kind, PipelineErrorKind::SlideGeneration { index: 1, .. })
    ));
    assert!(!state.note_failure(&err));
    assert!(*state.ready());
}

#[tokio::test]
async fn restart_mid_run_discards_late_results() {
    let mut state = SessionState::new();
    state.mark_ready();
    // The epoch advances while the second slide's plan call is in flight;
    // its result must never reach the editor.
    let driver = MockDriver::with_behavior(MockBehavior {
        restart_at: Some((4, state.epoch().clone())),
        ..MockBehavior::default()
    });
    let mut pipeline = DeckPipeline::new(driver, session(ExportFormat::Pdf), state.begin_run());
    let outline = fixed_outline(3);
    let mut editor = DeckEditor::default();

    let err = pipeline.run(&outline, &mut editor).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        LuminaErrorKind::Pipeline(p) if matches!(p.kind, PipelineErrorKind::StaleEpoch { .. })
    ));

    // Only the first slide's work is recorded; readiness is untouched.
    assert_eq!(editor.history().len(), 4);
    assert!(editor.deck().slides[1].layout == SlideLayout::Content);
    assert!(!state.note_failure(&err));
    assert!(*state.ready());
}

#[tokio::test]
async fn outline_synthesis_uses_session_count() {
    let mut state = SessionState::new();
    state.mark_ready();
    let session = GenerationSession::builder()
        .topic("Mock harbors")
        .slide_count(4usize)
        .build()
        .unwrap();
    let pipeline = DeckPipeline::new(MockDriver::new(), session, state.begin_run());

    let outline = pipeline.synthesize_outline().await.unwrap();
    assert_eq!(outline.len(), 4);
    for (i, item) in outline.iter().enumerate() {
        assert!(item.id.starts_with("slide-"));
        assert!(item.id.ends_with(&format!("-{i}")));
        assert!(!item.title.is_empty());
    }
}
