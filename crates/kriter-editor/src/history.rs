//! Undo/redo history.
//!
//! Snapshot based: every undoable operation pushes a deep copy of the
//! persistent document (nodes + connections) taken *before* the mutation.
//! Undo swaps the current state onto the redo stack and restores the
//! snapshot; redo is the mirror image.

use kriter_core::{Document, Layout};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default maximum undo depth.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// A labelled deep copy of the persistent document.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub action: String,
    /// Per-history sequence number; identifies this entry for [`History::rollback`].
    pub seq: u64,
    /// Unix milliseconds at capture time.
    pub timestamp_ms: u64,
    pub layout: Layout,
}

impl Snapshot {
    fn capture(action: &str, seq: u64, layout: Layout) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self {
            action: action.to_string(),
            seq,
            timestamp_ms,
            layout,
        }
    }
}

/// Bounded undo stack plus redo stack.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    next_seq: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            next_seq: 0,
        }
    }

    /// Record the current document before a mutation labelled `action`.
    /// Clears the redo stack. Returns the new entry's sequence number.
    pub fn save_state(&mut self, action: &str, doc: &Document) -> u64 {
        self.push_layout(action, doc.layout())
    }

    /// Record an already captured layout. Used when the pre-mutation state
    /// was taken before it was known whether anything would change.
    pub fn push_layout(&mut self, action: &str, layout: Layout) -> u64 {
        log::debug!("history: save '{action}'");
        let snapshot = self.capture(action, layout);
        let seq = snapshot.seq;
        self.push_undo(snapshot);
        self.redo_stack.clear();
        seq
    }

    /// Restore the newest snapshot. Returns its action label.
    pub fn undo(&mut self, doc: &mut Document) -> Option<String> {
        let Some(prev) = self.undo_stack.pop() else {
            log::debug!("history: nothing to undo");
            return None;
        };
        let current = self.capture(&prev.action, doc.layout());
        self.redo_stack.push(current);
        doc.restore(prev.layout);
        log::info!("undo: {}", prev.action);
        Some(prev.action)
    }

    /// Re-apply the most recently undone state. Returns its action label.
    pub fn redo(&mut self, doc: &mut Document) -> Option<String> {
        let Some(next) = self.redo_stack.pop() else {
            log::debug!("history: nothing to redo");
            return None;
        };
        let current = self.capture(&next.action, doc.layout());
        self.push_undo(current);
        doc.restore(next.layout);
        log::info!("redo: {}", next.action);
        Some(next.action)
    }

    /// Drop the newest snapshot and restore it, leaving redo untouched.
    /// Abandons a gesture whose snapshot was already taken. Does nothing
    /// unless the newest entry is the one numbered `seq`.
    pub fn rollback(&mut self, seq: u64, doc: &mut Document) -> bool {
        if self.undo_stack.last().map(|s| s.seq) != Some(seq) {
            log::debug!("history: snapshot {seq} is not on top, nothing to roll back");
            return false;
        }
        let Some(prev) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("history: rollback '{}'", prev.action);
        doc.restore(prev.layout);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the snapshot the next undo would restore.
    pub fn peek_undo(&self) -> Option<&str> {
        self.undo_stack.last().map(|s| s.action.as_str())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn capture(&mut self, action: &str, layout: Layout) -> Snapshot {
        let seq = self.next_seq;
        self.next_seq += 1;
        Snapshot::capture(action, seq, layout)
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }
}
