use chrono::{DateTime, Utc};

use crate::models::trackable::{Trackable, TrackedField};

/// Lifecycle action applied to a record's shadow copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMode {
    /// Capture the record as the new baseline, replacing any previous one
    Create,
    /// Copy the baseline back onto the record
    Restore,
    /// Reset the baseline's scalar fields after a successful commit
    Clear,
}

/// Point-in-time copy of a record's tracked fields.
///
/// The copy is a plain `R` built through `SnapshotProvider`, so it holds no
/// change log and, since shadow copies live outside the records they copy,
/// never a shadow copy of its own.
#[derive(Debug, Clone)]
pub struct ShadowCopy<R> {
    state: R,
    captured_at: DateTime<Utc>,
    cleared: bool,
}

impl<R: Trackable> ShadowCopy<R> {
    pub fn capture(record: &R) -> Self {
        Self {
            state: record.snapshot(),
            captured_at: Utc::now(),
            cleared: false,
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Whether the scalar fields were reset by [`SnapshotMode::Clear`]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// A shadow copy is only a baseline for the record it was taken from
    pub fn belongs_to(&self, record: &R) -> bool {
        self.state.get_id() == record.get_id()
    }

    pub(crate) fn restore_onto(&self, record: &mut R) {
        restore_tracked(record, &self.state);
    }

    pub(crate) fn clear(&mut self) {
        for field in R::Field::ALL {
            self.state.clear_field(*field);
        }
        self.cleared = true;
    }
}

/// Overwrite every tracked field of `record` with the value held by `source`
pub(crate) fn restore_tracked<R: Trackable>(record: &mut R, source: &R) {
    for field in R::Field::ALL {
        record.restore_field(source, *field);
    }
}
