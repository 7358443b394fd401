use std::collections::VecDeque;

use super::shadow_copy::restore_tracked;
use crate::models::trackable::Trackable;

pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// Bounded undo/redo history of one record within one edit session.
///
/// Checkpoints are snapshots of the tracked fields. Undo and redo restore
/// tracked fields only, so the record's change log and persistence
/// bookkeeping are never rolled back.
#[derive(Debug, Clone)]
pub struct UndoHistory<R> {
    undo: VecDeque<R>,
    redo: Vec<R>,
    capacity: usize,
}

impl<R: Trackable> Default for UndoHistory<R> {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}

impl<R: Trackable> UndoHistory<R> {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Remember the current state. Discards anything that could be redone.
    pub fn checkpoint(&mut self, record: &R) {
        self.redo.clear();
        self.push_undo(record.snapshot());
    }

    pub fn undo(&mut self, record: &mut R) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(record.snapshot());
        restore_tracked(record, &previous);
        true
    }

    pub fn redo(&mut self, record: &mut R) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.push_undo(record.snapshot());
        restore_tracked(record, &next);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: R) {
        if self.capacity == 0 {
            return;
        }
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }
}
