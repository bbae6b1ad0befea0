//! Pre-generation outline editing.

use derive_getters::Getters;
use lumina_core::{OutlineItem, custom_item_id, stamp_millis};

/// Title placed on hand-added outline items.
const NEW_SLIDE_TITLE: &str = "New Slide";

/// Intent placed on hand-added outline items.
const NEW_SLIDE_INTENT: &str = "Add custom content";

/// Editing facade over the outline agreed before deck generation.
///
/// Outline edits are not undoable; the outline is cheap to regenerate and is
/// superseded once the pipeline seeds the deck. Out-of-bounds indices are
/// no-ops returning `false`.
///
/// # Examples
///
/// ```
/// use lumina_core::OutlineItem;
/// use lumina_deck::OutlineEditor;
///
/// let mut editor = OutlineEditor::new(vec![OutlineItem {
///     id: "slide-0-0".to_string(),
///     title: "Opening".to_string(),
///     intent: "Hook the room".to_string(),
/// }]);
/// editor.add();
/// assert_eq!(editor.items().len(), 2);
/// assert!(editor.items()[1].id.starts_with("new-"));
/// ```
#[derive(Debug, Clone, Default, Getters)]
pub struct OutlineEditor {
    /// Outline items in presentation order.
    items: Vec<OutlineItem>,
}

impl OutlineEditor {
    /// Wrap a synthesized outline for editing.
    pub fn new(items: Vec<OutlineItem>) -> Self {
        Self { items }
    }

    /// Surrender the edited outline for pipeline seeding.
    pub fn into_items(self) -> Vec<OutlineItem> {
        self.items
    }

    /// Replace the title of the item at `index`.
    pub fn set_title(&mut self, index: usize, title: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Replace the intent of the item at `index`.
    pub fn set_intent(&mut self, index: usize, intent: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.intent = intent.into();
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a placeholder item with a fresh `new-` stamped id.
    pub fn add(&mut self) -> &OutlineItem {
        self.items.push(OutlineItem {
            id: custom_item_id(stamp_millis()),
            title: NEW_SLIDE_TITLE.to_string(),
            intent: NEW_SLIDE_INTENT.to_string(),
        });
        // Just pushed, so the list is non-empty.
        &self.items[self.items.len() - 1]
    }

    /// Move the item at `from` to position `to`, shifting neighbors.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn title_and_intent_edits_land() {
        let mut editor = OutlineEditor::new(outline(2));
        assert!(editor.set_title(0, "Reframed"));
        assert!(editor.set_intent(1, "Close hard"));
        assert_eq!(editor.items()[0].title, "Reframed");
        assert_eq!(editor.items()[1].intent, "Close hard");
    }

    #[test]
    fn out_of_bounds_edits_are_no_ops() {
        let mut editor = OutlineEditor::new(outline(1));
        assert!(!editor.set_title(3, "nope"));
        assert!(!editor.remove(3));
        assert!(!editor.move_item(0, 3));
        assert_eq!(editor.items().len(), 1);
    }

    #[test]
    fn added_items_carry_placeholder_text() {
        let mut editor = OutlineEditor::new(outline(1));
        let added = editor.add();
        assert_eq!(added.title, NEW_SLIDE_TITLE);
        assert_eq!(added.intent, NEW_SLIDE_INTENT);
        assert!(added.id.starts_with("new-"));
    }

    #[test]
    fn move_reorders_and_preserves_ids() {
        let mut editor = OutlineEditor::new(outline(3));
        assert!(editor.move_item(2, 0));
        let ids: Vec<_> = editor.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["slide-0-2", "slide-0-0", "slide-0-1"]);
    }

    #[test]
    fn remove_shrinks_in_order() {
        let mut editor = OutlineEditor::new(outline(3));
        assert!(editor.remove(1));
        let titles: Vec<_> = editor.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Slide 1", "Slide 3"]);
    }
}
