//! Post-generation deck editing.
//!
//! Every edit gesture clones the working deck, mutates the clone, and commits
//! it through [`DeckHistory`], so one gesture produces exactly one snapshot.
//! Transient edits (keystroke-level changes, in-flight image regeneration)
//! replace the working deck without recording a snapshot; the settled state
//! is committed afterwards.

use crate::DeckHistory;
use lumina_core::{
    Callout, ChartKind, ChartRow, ComparisonItem, Deck, GridItem, ImageState, ProcessStep, Slide,
    SlideLayout, TimelineStep,
};
use lumina_error::LuminaResult;
use lumina_interface::{ImageRequest, LuminaDriver};

/// Partial slide update; `None` fields are left untouched.
///
/// The slide id is deliberately absent. It is assigned once from the outline
/// and never rewritten by edits.
///
/// # Examples
///
/// ```
/// use lumina_core::SlideLayout;
/// use lumina_deck::SlidePatch;
///
/// let patch = SlidePatch {
///     title: Some("Revised title".to_string()),
///     layout: Some(SlideLayout::Quote),
///     ..SlidePatch::default()
/// };
/// assert!(patch.subtitle.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlidePatch {
    /// New slide title
    pub title: Option<String>,
    /// New leading summary text
    pub subtitle: Option<String>,
    /// New layout discriminant
    pub layout: Option<SlideLayout>,
    /// Full replacement of the bullet list
    pub content_points: Option<Vec<String>>,
    /// New image synthesis prompt
    pub image_prompt: Option<String>,
    /// New image outcome; `ImageState::NotAttempted` clears the slot
    pub image: Option<ImageState>,
    /// New presenter notes
    pub speaker_notes: Option<String>,
    /// Full replacement of timeline steps
    pub timeline_steps: Option<Vec<TimelineStep>>,
    /// Full replacement of grid cards
    pub grid_items: Option<Vec<GridItem>>,
    /// Full replacement of process steps
    pub process_steps: Option<Vec<ProcessStep>>,
    /// Full replacement of comparison rows
    pub comparison_items: Option<Vec<ComparisonItem>>,
    /// New dominant figure
    pub big_number: Option<String>,
    /// New label under the dominant figure
    pub big_number_label: Option<String>,
    /// New quote attribution
    pub quote_author: Option<String>,
    /// Full replacement of chart rows
    pub chart_data: Option<Vec<ChartRow>>,
    /// New chart kind
    pub chart_kind: Option<ChartKind>,
    /// Full replacement of corner annotations
    pub callouts: Option<Vec<Callout>>,
    /// New footer conclusion line
    pub conclusion: Option<String>,
}

impl SlidePatch {
    /// Apply the set fields onto a slide.
    pub fn apply_to(&self, slide: &mut Slide) {
        if let Some(title) = &self.title {
            slide.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            slide.subtitle = Some(subtitle.clone());
        }
        if let Some(layout) = self.layout {
            slide.layout = layout;
        }
        if let Some(points) = &self.content_points {
            slide.content_points = points.clone();
        }
        if let Some(prompt) = &self.image_prompt {
            slide.image_prompt = Some(prompt.clone());
        }
        if let Some(image) = &self.image {
            slide.image = image.clone();
        }
        if let Some(notes) = &self.speaker_notes {
            slide.speaker_notes = Some(notes.clone());
        }
        if let Some(steps) = &self.timeline_steps {
            slide.timeline_steps = Some(steps.clone());
        }
        if let Some(items) = &self.grid_items {
            slide.grid_items = Some(items.clone());
        }
        if let Some(steps) = &self.process_steps {
            slide.process_steps = Some(steps.clone());
        }
        if let Some(items) = &self.comparison_items {
            slide.comparison_items = Some(items.clone());
        }
        if let Some(number) = &self.big_number {
            slide.big_number = Some(number.clone());
        }
        if let Some(label) = &self.big_number_label {
            slide.big_number_label = Some(label.clone());
        }
        if let Some(author) = &self.quote_author {
            slide.quote_author = Some(author.clone());
        }
        if let Some(rows) = &self.chart_data {
            slide.chart_data = Some(rows.clone());
        }
        if let Some(kind) = self.chart_kind {
            slide.chart_kind = Some(kind);
        }
        if let Some(callouts) = &self.callouts {
            slide.callouts = Some(callouts.clone());
        }
        if let Some(conclusion) = &self.conclusion {
            slide.conclusion = Some(conclusion.clone());
        }
    }
}

/// Editing facade over a deck and its undo history.
///
/// All mutation helpers are index-addressed and treat out-of-bounds indices
/// as no-ops that record nothing, returning `false`.
///
/// # Examples
///
/// ```
/// use lumina_core::{Deck, OutlineItem};
/// use lumina_deck::{DeckEditor, SlidePatch};
///
/// let outline = vec![OutlineItem {
///     id: "slide-0-0".to_string(),
///     title: "Intro".to_string(),
///     intent: "Set the stage".to_string(),
/// }];
/// let mut editor = DeckEditor::default();
/// editor.snapshot(Deck::stub_from_outline(&outline));
///
/// let patch = SlidePatch {
///     title: Some("Welcome".to_string()),
///     ..SlidePatch::default()
/// };
/// assert!(editor.update_slide(0, &patch, false));
/// assert_eq!(editor.deck().slides[0].title, "Welcome");
/// assert!(editor.undo());
/// assert_eq!(editor.deck().slides[0].title, "Intro");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeckEditor {
    history: DeckHistory,
}

impl DeckEditor {
    /// The deck as the user currently sees it.
    pub fn deck(&self) -> &Deck {
        self.history.current()
    }

    /// Read access to the undo history.
    pub fn history(&self) -> &DeckHistory {
        &self.history
    }

    /// Commit a whole deck state as a new snapshot.
    ///
    /// Used by the generation pipeline after each stage lands.
    pub fn snapshot(&mut self, deck: Deck) {
        self.history.push(deck);
    }

    /// Step back one snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step forward one snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Apply a patch to the slide at `index`.
    ///
    /// A transient update changes the visible deck without recording a
    /// snapshot; pass `transient: false` once the gesture settles.
    pub fn update_slide(&mut self, index: usize, patch: &SlidePatch, transient: bool) -> bool {
        self.mutate(index, transient, |slide| {
            patch.apply_to(slide);
            true
        })
    }

    /// Switch the layout of the slide at `index`.
    pub fn set_layout(&mut self, index: usize, layout: SlideLayout) -> bool {
        self.mutate(index, false, |slide| {
            slide.layout = layout;
            true
        })
    }

    /// Append an empty bullet to the slide at `index`.
    pub fn add_content_point(&mut self, index: usize) -> bool {
        self.mutate(index, false, |slide| {
            slide.content_points.push(String::new());
            true
        })
    }

    /// Replace the bullet at `point` on the slide at `index`.
    pub fn edit_content_point(
        &mut self,
        index: usize,
        point: usize,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        self.mutate(index, false, |slide| {
            match slide.content_points.get_mut(point) {
                Some(slot) => {
                    *slot = text;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the bullet at `point` from the slide at `index`.
    pub fn remove_content_point(&mut self, index: usize, point: usize) -> bool {
        self.mutate(index, false, |slide| {
            if point < slide.content_points.len() {
                slide.content_points.remove(point);
                true
            } else {
                false
            }
        })
    }

    /// Append a chart row to the slide at `index`, creating the chart data
    /// if the slide has none yet.
    pub fn add_chart_row(&mut self, index: usize, row: ChartRow) -> bool {
        self.mutate(index, false, |slide| {
            slide.chart_data.get_or_insert_with(Vec::new).push(row);
            true
        })
    }

    /// Replace the chart row at `row_index` on the slide at `index`.
    pub fn edit_chart_row(&mut self, index: usize, row_index: usize, row: ChartRow) -> bool {
        self.mutate(index, false, |slide| {
            match slide
                .chart_data
                .as_mut()
                .and_then(|rows| rows.get_mut(row_index))
            {
                Some(slot) => {
                    *slot = row;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the chart row at `row_index` from the slide at `index`.
    pub fn remove_chart_row(&mut self, index: usize, row_index: usize) -> bool {
        self.mutate(index, false, |slide| {
            match slide.chart_data.as_mut() {
                Some(rows) if row_index < rows.len() => {
                    rows.remove(row_index);
                    true
                }
                _ => false,
            }
        })
    }

    /// Append a callout to the slide at `index`.
    pub fn add_callout(&mut self, index: usize, callout: Callout) -> bool {
        self.mutate(index, false, |slide| {
            slide.callouts.get_or_insert_with(Vec::new).push(callout);
            true
        })
    }

    /// Replace the callout at `callout_index` on the slide at `index`.
    pub fn edit_callout(&mut self, index: usize, callout_index: usize, callout: Callout) -> bool {
        self.mutate(index, false, |slide| {
            match slide
                .callouts
                .as_mut()
                .and_then(|callouts| callouts.get_mut(callout_index))
            {
                Some(slot) => {
                    *slot = callout;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the callout at `callout_index` from the slide at `index`.
    pub fn remove_callout(&mut self, index: usize, callout_index: usize) -> bool {
        self.mutate(index, false, |slide| {
            match slide.callouts.as_mut() {
                Some(callouts) if callout_index < callouts.len() => {
                    callouts.remove(callout_index);
                    true
                }
                _ => false,
            }
        })
    }

    /// Re-run image synthesis for the slide at `index`.
    ///
    /// The current image is cleared transiently so the caller can show a
    /// placeholder, then the outcome is committed as one snapshot. Failed
    /// synthesis commits [`ImageState::Failed`]; authorization errors commit
    /// the failed slot and then surface as `Err`.
    pub async fn regenerate_image<D>(
        &mut self,
        driver: &D,
        index: usize,
        request: &ImageRequest,
    ) -> LuminaResult<bool>
    where
        D: LuminaDriver + ?Sized,
    {
        let clear = SlidePatch {
            image: Some(ImageState::NotAttempted),
            ..SlidePatch::default()
        };
        if !self.update_slide(index, &clear, true) {
            return Ok(false);
        }
        let image = match driver.synthesize_image(request).await {
            Ok(image) => image,
            Err(e) => {
                let settle = SlidePatch {
                    image: Some(ImageState::Failed),
                    ..SlidePatch::default()
                };
                self.update_slide(index, &settle, false);
                return Err(e);
            }
        };
        let settle = SlidePatch {
            image: Some(image),
            ..SlidePatch::default()
        };
        self.update_slide(index, &settle, false);
        Ok(true)
    }

    fn mutate<F>(&mut self, index: usize, transient: bool, apply: F) -> bool
    where
        F: FnOnce(&mut Slide) -> bool,
    {
        let mut deck = self.history.current().clone();
        let Some(slide) = deck.slide_mut(index) else {
            return false;
        };
        if !apply(slide) {
            return false;
        }
        if transient {
            self.history.replace_current(deck);
        } else {
            self.history.push(deck);
        }
        true
    }
}
