//! The staged deck generation pipeline.
//!
//! Generation runs one slide at a time, committing a history snapshot after
//! every completed stage so partially generated decks are always visible and
//! undoable. The stage order depends on the export medium: the page-oriented
//! branch plans the visual before writing content, the slide-deck branch
//! writes content first and only synthesizes an image when the content asked
//! for one.

use crate::{DeckEditor, EpochGuard, GenerationSession};
use lumina_core::{Deck, ImageSize, OutlineItem};
use lumina_error::{
    BuilderError, LuminaError, LuminaErrorKind, LuminaResult, PipelineError, PipelineErrorKind,
};
use lumina_interface::{
    ImageRequest, LuminaDriver, OutlineRequest, SlideContentRequest, VisualPlanRequest,
};

/// Resolution used for in-pipeline preview images.
///
/// Previews always render small; the user's configured size applies to
/// explicit regeneration requests.
const PREVIEW_IMAGE_SIZE: ImageSize = ImageSize::Size1K;

/// Drives a generation run from outline to fully populated deck.
///
/// The pipeline owns the driver and the run configuration; deck state lives
/// in the caller's [`DeckEditor`] so the user can undo, redo, and edit the
/// moment the run finishes (or fails partway).
///
/// Per-slide transport failures never surface here: drivers absorb them into
/// fallback content. What does escape is authorization failures, which abort
/// the run for the caller to revoke readiness, and stale-epoch aborts after
/// a restart.
pub struct DeckPipeline<D: LuminaDriver> {
    driver: D,
    session: GenerationSession,
    epoch: EpochGuard,
    position: usize,
    total: usize,
    done: bool,
}

impl<D: LuminaDriver> DeckPipeline<D> {
    /// Bind a driver and session to a run identity.
    pub fn new(driver: D, session: GenerationSession, epoch: EpochGuard) -> Self {
        Self {
            driver,
            session,
            epoch,
            position: 0,
            total: 0,
            done: false,
        }
    }

    /// The run configuration.
    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    /// The generation backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Slides completed and slides total for the active run.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.total)
    }

    /// True once every slide of the last run has completed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Synthesize the outline the user will review before the deck run.
    #[tracing::instrument(
        skip(self),
        fields(topic = %self.session.topic(), slides = %self.session.slide_count())
    )]
    pub async fn synthesize_outline(&self) -> LuminaResult<Vec<OutlineItem>> {
        let request = OutlineRequest::builder()
            .topic(self.session.topic().clone())
            .doc_context(self.session.doc_context().clone())
            .slide_count(*self.session.slide_count())
            .language(*self.session.language())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        self.driver.synthesize_outline(&request).await
    }

    /// Generate the full deck from an agreed outline.
    ///
    /// Seeds the editor with one stub slide per outline item, then fills the
    /// slides in order, committing a snapshot after each stage. Slide ids are
    /// taken from the outline items and survive every stage.
    ///
    /// # Errors
    ///
    /// - an empty outline is rejected before any snapshot is taken
    /// - authorization failures from the driver abort the run as-is
    /// - a restart during the run aborts with a stale-epoch error before the
    ///   late result can touch the editor
    /// - anything else is wrapped with the failing slide index
    #[tracing::instrument(
        skip(self, outline, editor),
        fields(slides = outline.len(), medium = %self.session.export_format())
    )]
    pub async fn run(
        &mut self,
        outline: &[OutlineItem],
        editor: &mut DeckEditor,
    ) -> LuminaResult<()> {
        if outline.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyOutline).into());
        }
        self.total = outline.len();
        self.position = 0;
        self.done = false;

        self.apply(editor, Deck::stub_from_outline(outline))?;

        for (index, item) in outline.iter().enumerate() {
            self.position = index;
            let staged = if self.session.export_format().is_image_centric() {
                self.stage_image_first(editor, index, item).await
            } else {
                self.stage_content_first(editor, index, item).await
            };
            match staged {
                Ok(()) => {}
                Err(e) if e.is_authorization() || is_stale(&e) => return Err(e),
                Err(e) => {
                    tracing::error!(slide = index, error = %e, "Slide generation failed");
                    return Err(PipelineError::new(PipelineErrorKind::SlideGeneration {
                        index,
                        message: e.to_string(),
                    })
                    .into());
                }
            }
        }

        self.position = self.total;
        self.done = true;
        tracing::info!(slides = self.total, "Deck generation complete");
        Ok(())
    }

    /// Page-oriented branch: plan the visual, synthesize the image, then
    /// write content with the plan as context.
    async fn stage_image_first(
        &self,
        editor: &mut DeckEditor,
        index: usize,
        item: &OutlineItem,
    ) -> LuminaResult<()> {
        let plan_request = VisualPlanRequest::builder()
            .topic(self.session.topic().clone())
            .item(item.clone())
            .style_description(self.session.style().description.clone())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let plan = self.driver.plan_slide_visual(&plan_request).await?;

        let mut deck = editor.deck().clone();
        if let Some(slide) = deck.slide_mut(index) {
            slide.layout = plan.layout;
            slide.image_prompt = Some(plan.image_prompt.clone());
        }
        self.apply(editor, deck)?;

        let image_request = ImageRequest::builder()
            .prompt(plan.image_prompt.clone())
            .size(PREVIEW_IMAGE_SIZE)
            .tier(*self.session.tier())
            .style_reference(self.session.style_reference().clone())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let image = self.driver.synthesize_image(&image_request).await?;

        let mut deck = editor.deck().clone();
        if let Some(slide) = deck.slide_mut(index) {
            slide.image = image;
        }
        self.apply(editor, deck)?;

        let content_request = SlideContentRequest::builder()
            .topic(self.session.topic().clone())
            .item(item.clone())
            .style_description(self.session.style().description.clone())
            .language(*self.session.language())
            .presentation_format(*self.session.presentation_format())
            .export_format(*self.session.export_format())
            .tier(*self.session.tier())
            .plan(plan)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let mut slide = self.driver.synthesize_slide_content(&content_request).await?;
        slide.id = item.id.clone();

        let mut deck = editor.deck().clone();
        if let Some(slot) = deck.slide_mut(index) {
            // Content replaces the record but the visual work already landed.
            slide.image = slot.image.clone();
            slide.image_prompt = slot.image_prompt.clone();
            *slot = slide;
        }
        self.apply(editor, deck)
    }

    /// Slide-deck branch: write content first, then synthesize an image only
    /// when the content proposed a prompt.
    async fn stage_content_first(
        &self,
        editor: &mut DeckEditor,
        index: usize,
        item: &OutlineItem,
    ) -> LuminaResult<()> {
        let content_request = SlideContentRequest::builder()
            .topic(self.session.topic().clone())
            .item(item.clone())
            .style_description(self.session.style().description.clone())
            .language(*self.session.language())
            .presentation_format(*self.session.presentation_format())
            .export_format(*self.session.export_format())
            .tier(*self.session.tier())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let mut slide = self.driver.synthesize_slide_content(&content_request).await?;
        slide.id = item.id.clone();
        let prompt = slide.image_prompt.clone();

        let mut deck = editor.deck().clone();
        if let Some(slot) = deck.slide_mut(index) {
            *slot = slide;
        }
        self.apply(editor, deck)?;

        let Some(prompt) = prompt.filter(|p| !p.trim().is_empty()) else {
            return Ok(());
        };

        let image_request = ImageRequest::builder()
            .prompt(prompt)
            .size(PREVIEW_IMAGE_SIZE)
            .tier(*self.session.tier())
            .style_reference(self.session.style_reference().clone())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        let image = self.driver.synthesize_image(&image_request).await?;

        let mut deck = editor.deck().clone();
        if let Some(slide) = deck.slide_mut(index) {
            slide.image = image;
        }
        self.apply(editor, deck)
    }

    /// Commit a deck state, refusing if the run has been superseded.
    fn apply(&self, editor: &mut DeckEditor, deck: Deck) -> LuminaResult<()> {
        if !self.epoch.is_current() {
            return Err(PipelineError::new(PipelineErrorKind::StaleEpoch {
                current: self.epoch.latest(),
                stale: self.epoch.seen(),
            })
            .into());
        }
        editor.snapshot(deck);
        Ok(())
    }
}

fn is_stale(error: &LuminaError) -> bool {
    matches!(
        error.kind(),
        LuminaErrorKind::Pipeline(p) if matches!(p.kind, PipelineErrorKind::StaleEpoch { .. })
    )
}
