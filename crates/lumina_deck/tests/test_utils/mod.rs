//! Test utilities for deck tests.
//!
//! Provides a deterministic mock driver so pipeline and editing behavior can
//! be tested without a generation backend.

#![allow(dead_code)]

use async_trait::async_trait;
use lumina_core::{
    AnalyzedStyle, Callout, CalloutPosition, ImageState, OutlineItem, Slide, SlideLayout,
    outline_item_id,
};
use lumina_deck::GenerationEpoch;
use lumina_error::{DriverError, DriverErrorKind, LuminaResult};
use lumina_interface::{
    ChartInsightRequest, ImageRequest, LuminaDriver, OutlineRequest, SlideContentRequest,
    VisualPlan, VisualPlanRequest,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Millisecond stamp used for deterministic outline ids.
pub const STAMP: i64 = 1_712_000_000_000;

/// Scripted failure behavior for [`MockDriver`].
///
/// Call ordinals are 1-based and count every driver operation in invocation
/// order.
#[derive(Default)]
pub struct MockBehavior {
    /// Raise an authorization failure from this call onward.
    pub auth_fail_at: Option<usize>,
    /// Raise a transport failure from this call onward.
    pub transport_fail_at: Option<usize>,
    /// All image synthesis reports failure instead of a data URI.
    pub images_fail: bool,
    /// Content slides omit image prompts.
    pub omit_image_prompts: bool,
    /// Advance this epoch when the given call runs.
    pub restart_at: Option<(usize, GenerationEpoch)>,
}

/// Deterministic in-memory driver with scripted failures and a call log.
pub struct MockDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Total driver operations invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Operation names in invocation order.
    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn observe(&self, op: &str) -> LuminaResult<()> {
        let ordinal = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.lock().unwrap().push(op.to_string());
        if let Some((at, epoch)) = &self.behavior.restart_at {
            if ordinal == *at {
                epoch.advance();
            }
        }
        if let Some(at) = self.behavior.auth_fail_at {
            if ordinal >= at {
                return Err(DriverError::new(DriverErrorKind::MissingApiKey).into());
            }
        }
        if let Some(at) = self.behavior.transport_fail_at {
            if ordinal >= at {
                return Err(DriverError::new(DriverErrorKind::ApiRequest(
                    "mock transport failure".to_string(),
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl LuminaDriver for MockDriver {
    async fn synthesize_outline(&self, req: &OutlineRequest) -> LuminaResult<Vec<OutlineItem>> {
        self.observe("outline")?;
        Ok((0..*req.slide_count())
            .map(|i| OutlineItem {
                id: outline_item_id(STAMP, i),
                title: format!("Slide {}", i + 1),
                intent: format!("Cover part {} of {}", i + 1, req.topic()),
            })
            .collect())
    }

    async fn plan_slide_visual(&self, req: &VisualPlanRequest) -> LuminaResult<VisualPlan> {
        self.observe("plan")?;
        Ok(VisualPlan {
            layout: SlideLayout::Image,
            image_prompt: format!("Visual for {}", req.item().title),
        })
    }

    async fn synthesize_slide_content(&self, req: &SlideContentRequest) -> LuminaResult<Slide> {
        self.observe("content")?;
        let mut slide = Slide::stub(&req.item().id, &req.item().title);
        slide.content_points = vec!["First point".to_string(), "Second point".to_string()];
        slide.speaker_notes = Some(format!("Notes for {}", req.item().title));
        if !self.behavior.omit_image_prompts {
            slide.image_prompt = Some(format!("Art for {}", req.item().title));
        }
        if let Some(plan) = req.plan() {
            slide.layout = plan.layout;
        }
        Ok(slide)
    }

    async fn synthesize_image(&self, req: &ImageRequest) -> LuminaResult<ImageState> {
        self.observe("image")?;
        if self.behavior.images_fail {
            return Ok(ImageState::Failed);
        }
        Ok(ImageState::Ready(format!(
            "data:image/png;base64,len{}",
            req.prompt().len()
        )))
    }

    async fn analyze_style_from_image(&self, _image_base64: &str) -> LuminaResult<AnalyzedStyle> {
        self.observe("style-image")?;
        Ok(AnalyzedStyle::fallback("Mock analyzed style"))
    }

    async fn analyze_style_from_text(&self, prompt: &str) -> LuminaResult<AnalyzedStyle> {
        self.observe("style-text")?;
        Ok(AnalyzedStyle::fallback(prompt))
    }

    async fn suggest_chart_insights(
        &self,
        _req: &ChartInsightRequest,
    ) -> LuminaResult<Vec<Callout>> {
        self.observe("insights")?;
        Ok(vec![Callout {
            text: "Mock insight".to_string(),
            value: "+1".to_string(),
            position: CalloutPosition::TopRight,
        }])
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Deterministic outline with `n` items stamped at [`STAMP`].
pub fn fixed_outline(n: usize) -> Vec<OutlineItem> {
    (0..n)
        .map(|i| OutlineItem {
            id: outline_item_id(STAMP, i),
            title: format!("Slide {}", i + 1),
            intent: "Details".to_string(),
        })
        .collect()
}
