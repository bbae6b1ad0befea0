//! Outline items and id stamping.

use serde::{Deserialize, Serialize};

/// One agreed slide title/intent pair, produced by outline synthesis.
///
/// Outline items are ephemeral: the user edits them freely before deck
/// generation, and they are superseded once the pipeline seeds the deck.
/// The item's `id` survives as the slide id.
///
/// # Examples
///
/// ```
/// use lumina_core::OutlineItem;
///
/// let item = OutlineItem {
///     id: "slide-1712000000000-0".to_string(),
///     title: "Why now".to_string(),
///     intent: "Urgency framing".to_string(),
/// };
/// assert!(item.id.starts_with("slide-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Stable identifier carried into the slide
    pub id: String,
    /// Slide title
    pub title: String,
    /// What the slide is meant to convey
    pub intent: String,
}

/// Current wall-clock milliseconds, used to stamp generated ids.
pub fn stamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Build the id for a synthesized outline item: `slide-{millis}-{index}`.
pub fn outline_item_id(millis: i64, index: usize) -> String {
    format!("slide-{millis}-{index}")
}

/// Build the id for a hand-added outline item: `new-{millis}`.
pub fn custom_item_id(millis: i64) -> String {
    format!("new-{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_ids_embed_stamp_and_index() {
        assert_eq!(outline_item_id(1712000000000, 3), "slide-1712000000000-3");
    }

    #[test]
    fn custom_ids_embed_stamp_only() {
        assert_eq!(custom_item_id(1712000000000), "new-1712000000000");
    }
}
