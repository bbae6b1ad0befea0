//! Undo history over complete deck snapshots.

use derive_getters::Getters;
use lumina_core::Deck;

/// Maximum number of snapshots retained before the oldest is evicted.
pub const HISTORY_CAP: usize = 50;

/// Linear undo log of full deck states.
///
/// Every committed change appends a complete clone of the deck; no diffs are
/// kept. The cursor addresses the snapshot the caller currently sees. Undo
/// and redo move the cursor without discarding entries, while a push after an
/// undo truncates the redo tail before appending. Once [`HISTORY_CAP`]
/// snapshots exist, each push evicts the oldest entry.
///
/// # Examples
///
/// ```
/// use lumina_core::Deck;
/// use lumina_deck::DeckHistory;
///
/// let mut history = DeckHistory::default();
/// history.push(Deck::default());
/// assert_eq!(*history.cursor(), 0);
/// assert!(!history.undo());
/// ```
#[derive(Debug, Clone, Default, Getters)]
pub struct DeckHistory {
    /// Committed snapshots, oldest first.
    snapshots: Vec<Deck>,
    /// Index of the snapshot the caller currently sees.
    cursor: usize,
    /// Working deck. Tracks the cursor except while a transient edit is live.
    current: Deck,
}

impl DeckHistory {
    /// Commit a deck state as the newest snapshot.
    ///
    /// Snapshots past the cursor are discarded first, so redo is invalidated
    /// by any change made after an undo.
    pub fn push(&mut self, deck: Deck) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(deck.clone());
        if self.snapshots.len() > HISTORY_CAP {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
        self.current = deck;
    }

    /// Replace the working deck without recording a snapshot.
    ///
    /// Used for transient edits such as keystroke-level text changes. The
    /// next [`push`](Self::push) commits the settled state; an undo before
    /// that discards the transient changes.
    pub fn replace_current(&mut self, deck: Deck) {
        self.current = deck;
    }

    /// Step the cursor back one snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.snapshots.is_empty() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.current = self.snapshots[self.cursor].clone();
        true
    }

    /// Step the cursor forward one snapshot. Returns false at the newest.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        self.current = self.snapshots[self.cursor].clone();
        true
    }

    /// True when an older snapshot exists to step back to.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor > 0
    }

    /// True when an undone snapshot exists to step forward to.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of committed snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
