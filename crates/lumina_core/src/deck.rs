//! The deck: an ordered collection of slides.

use crate::{OutlineItem, Slide};
use serde::{Deserialize, Serialize};

/// Ordered sequence of slides being built or edited.
///
/// Length is fixed when the pipeline seeds the deck from the outline; only
/// the pre-generation outline editor changes the count. `Clone` is the deep
/// copy used for history snapshots.
///
/// # Examples
///
/// ```
/// use lumina_core::{Deck, OutlineItem};
///
/// let outline = vec![OutlineItem {
///     id: "slide-1712000000000-0".to_string(),
///     title: "Intro".to_string(),
///     intent: "Set the stage".to_string(),
/// }];
/// let deck = Deck::stub_from_outline(&outline);
/// assert_eq!(deck.len(), 1);
/// assert_eq!(deck.slides[0].title, "Intro");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Deck {
    /// The slides, in display order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Seed a deck with one stub slide per outline item.
    pub fn stub_from_outline(outline: &[OutlineItem]) -> Self {
        Self {
            slides: outline
                .iter()
                .map(|item| Slide::stub(&item.id, &item.title))
                .collect(),
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if in bounds.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Mutable slide at `index`, if in bounds.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlideLayout;

    fn outline(n: usize) -> Vec<OutlineItem> {
        (0..n)
            .map(|i| OutlineItem {
                id: format!("slide-0-{i}"),
                title: format!("Slide {}", i + 1),
                intent: "Details".to_string(),
            })
            .collect()
    }

    #[test]
    fn stub_deck_mirrors_outline() {
        let deck = Deck::stub_from_outline(&outline(3));
        assert_eq!(deck.len(), 3);
        for (i, slide) in deck.slides.iter().enumerate() {
            assert_eq!(slide.id, format!("slide-0-{i}"));
            assert_eq!(slide.layout, SlideLayout::Content);
            assert!(slide.content_points.is_empty());
        }
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let deck = Deck::stub_from_outline(&outline(1));
        assert!(deck.slide(1).is_none());
    }
}
