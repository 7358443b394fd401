use makeitrain_db::models::audit::change_log::ChangeLogEntry;
use makeitrain_db::models::trackable::TrackedField;
use parking_lot::RwLock;

/// Append-only store of change log entries for one record type, in insertion order
pub struct ChangeLogRepositoryImpl<F: TrackedField> {
    pub(crate) entries: RwLock<Vec<ChangeLogEntry<F>>>,
}

impl<F: TrackedField> ChangeLogRepositoryImpl<F> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<F: TrackedField> Default for ChangeLogRepositoryImpl<F> {
    fn default() -> Self {
        Self::new()
    }
}
