//! Sparse-diff undo/redo history.
//!
//! One generic tracker serves both the drawing (palette indices) and the
//! palette (colours). An edit is recorded in two phases: `record(_, false)`
//! snapshots the buffer before the edit, `record(_, true)` diffs the
//! buffer after it and stores only the changed cells. Storing sparse
//! diffs bounds memory for large canvases with localized edits; the
//! 32-entry cap bounds the pathological full-canvas case.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

/// Maximum number of recorded edits kept for undo.
pub const HISTORY_LIMIT: usize = 32;

/// One recorded edit: changed cell index -> (old value, new value).
type ChangeMap<T> = HashMap<usize, (T, T)>;

/// A bounded deque of sparse buffer diffs with an undo/redo cursor.
///
/// The cursor sits between entries: everything before it can be undone,
/// everything at or after it can be redone. Recording a new edit
/// truncates the redo tail, as in any linear-undo model.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<ChangeMap<T>>,
    cursor: usize,
    /// Pre-edit snapshot; `Some` while a recording is open.
    previous: Option<Vec<T>>,
}

impl<T: Copy + PartialEq> History<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            previous: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn is_recording(&self) -> bool {
        self.previous.is_some()
    }

    /// Drop all entries and any open recording.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.previous = None;
    }

    /// Begin (`end == false`) or finish (`end == true`) recording one edit.
    ///
    /// Finishing diffs the pre-edit snapshot against `pixels`; an edit
    /// that changed nothing records no entry.
    ///
    /// # Panics
    ///
    /// Panics when the begin/end pairing is desynchronized (begin while
    /// already recording, or end without a begin). That is a bug in the
    /// orchestrating code, not a recoverable condition.
    pub fn record(&mut self, pixels: &[T], end: bool) {
        if !end {
            assert!(
                self.previous.is_none(),
                "history recording begun while a recording is already open"
            );
            self.previous = Some(pixels.to_vec());
            return;
        }

        let Some(previous) = self.previous.take() else {
            panic!("history recording ended without a matching begin");
        };

        let mut changes = ChangeMap::new();
        for (i, (&old, &new)) in previous.iter().zip(pixels).enumerate() {
            if old != new {
                changes.insert(i, (old, new));
            }
        }
        if changes.is_empty() {
            trace!("edit changed nothing, no history entry");
            return;
        }

        // A new edit invalidates any undone "future".
        self.entries.truncate(self.cursor);
        self.entries.push_back(changes);
        self.cursor = self.entries.len();

        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
            self.cursor -= 1;
            debug!(limit = HISTORY_LIMIT, "history full, evicted oldest entry");
        }
    }

    /// Apply one history step to `pixels` in place.
    ///
    /// Undo moves the cursor back and restores old values; redo restores
    /// new values and moves the cursor forward. Silently does nothing
    /// when no step is available in that direction.
    pub fn apply(&mut self, pixels: &mut [T], redo: bool) {
        if redo {
            if !self.can_redo() {
                return;
            }
            for (&cell, &(_, new)) in &self.entries[self.cursor] {
                pixels[cell] = new;
            }
            self.cursor += 1;
        } else {
            if !self.can_undo() {
                return;
            }
            self.cursor -= 1;
            for (&cell, &(old, _)) in &self.entries[self.cursor] {
                pixels[cell] = old;
            }
        }
    }
}

impl<T: Copy + PartialEq> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record one edit that applies `f` to the buffer.
    fn edit(history: &mut History<usize>, pixels: &mut Vec<usize>, f: impl Fn(&mut Vec<usize>)) {
        history.record(pixels, false);
        f(pixels);
        history.record(pixels, true);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new();
        let mut pixels = vec![0usize; 8];

        edit(&mut history, &mut pixels, |p| {
            p[2] = 5;
            p[6] = 1;
        });
        let after = pixels.clone();

        history.apply(&mut pixels, false);
        assert_eq!(pixels, vec![0; 8]);

        history.apply(&mut pixels, true);
        assert_eq!(pixels, after);
    }

    #[test]
    fn test_unchanged_edit_records_nothing() {
        let mut history = History::new();
        let pixels = vec![0usize; 4];
        history.record(&pixels, false);
        history.record(&pixels, true);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_availability() {
        let mut history = History::new();
        let mut pixels = vec![0usize; 4];
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        edit(&mut history, &mut pixels, |p| p[0] = 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.apply(&mut pixels, false);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_new_edit_truncates_redo_tail() {
        let mut history = History::new();
        let mut pixels = vec![0usize; 4];

        edit(&mut history, &mut pixels, |p| p[0] = 1);
        edit(&mut history, &mut pixels, |p| p[1] = 2);
        history.apply(&mut pixels, false);
        assert!(history.can_redo());

        edit(&mut history, &mut pixels, |p| p[3] = 9);
        assert!(!history.can_redo());

        // Undo walks back through the new edit, then the first one.
        history.apply(&mut pixels, false);
        history.apply(&mut pixels, false);
        assert_eq!(pixels, vec![0; 4]);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::new();
        let mut pixels = vec![0usize; 1];

        for i in 1..=(HISTORY_LIMIT + 1) {
            edit(&mut history, &mut pixels, |p| p[0] = i);
        }

        // Undo all the way: the first edit (0 -> 1) was evicted, so the
        // deepest reachable state is after it.
        let mut undone = 0;
        while history.can_undo() {
            history.apply(&mut pixels, false);
            undone += 1;
        }
        assert_eq!(undone, HISTORY_LIMIT);
        assert_eq!(pixels[0], 1);
    }

    #[test]
    fn test_undo_at_bottom_is_noop() {
        let mut history = History::new();
        let mut pixels = vec![7usize; 2];
        history.apply(&mut pixels, false);
        history.apply(&mut pixels, true);
        assert_eq!(pixels, vec![7; 2]);
    }

    #[test]
    #[should_panic(expected = "already open")]
    fn test_double_begin_panics() {
        let mut history = History::<usize>::new();
        history.record(&[0], false);
        history.record(&[0], false);
    }

    #[test]
    #[should_panic(expected = "without a matching begin")]
    fn test_end_without_begin_panics() {
        let mut history = History::<usize>::new();
        history.record(&[0], true);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut history = History::new();
        let mut pixels = vec![0usize; 2];
        edit(&mut history, &mut pixels, |p| p[0] = 1);
        history.record(&pixels, false);
        history.reset();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.is_recording());
    }
}
