use makeitrain_api::ServerAction;
use tracing::{debug, info};
use uuid::Uuid;

use super::shadow_copy::SnapshotMode;
use super::shadow_copy_tracker::ShadowCopyTracker;
use super::undo::UndoHistory;
use crate::config::TrackerConfig;
use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::trackable::Trackable;

/// One record open in one edit surface.
///
/// Owns the record, its shadow copy tracker and its undo history for the
/// lifetime of the surface, so several records can be edited side by side
/// without sharing state.
#[derive(Debug)]
pub struct EditSession<R: Trackable> {
    record: R,
    action: ServerAction,
    tracker: ShadowCopyTracker<R>,
    history: UndoHistory<R>,
}

impl<R: Trackable> EditSession<R> {
    /// Open a session. Editing an existing record captures its baseline.
    pub fn begin(mut record: R, action: ServerAction, config: &TrackerConfig) -> Self {
        let mut tracker = ShadowCopyTracker::new(config);
        if action == ServerAction::Edit {
            tracker.snapshot(&mut record, SnapshotMode::Create);
        }
        info!(record_id = %record.get_id(), %action, "Edit session started");
        Self {
            record,
            action,
            tracker,
            history: UndoHistory::default(),
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut R {
        &mut self.record
    }

    pub fn action(&self) -> ServerAction {
        self.action
    }

    pub fn tracker(&self) -> &ShadowCopyTracker<R> {
        &self.tracker
    }

    /// Whether the save control should be enabled.
    ///
    /// New records and deletions can always be saved; edits only when a
    /// tracked field changed.
    pub fn can_save(&self) -> bool {
        match self.action {
            ServerAction::Edit => self.tracker.has_changes(&self.record),
            ServerAction::Add | ServerAction::Delete => true,
        }
    }

    pub fn changed_fields(&self) -> Vec<R::Field> {
        self.tracker.changed_fields(&self.record)
    }

    /// Remember the current state for undo
    pub fn checkpoint(&mut self) {
        self.history.checkpoint(&self.record);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.record)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.record)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Cancel: put the baseline back and forget undo history
    pub fn discard(&mut self) {
        self.tracker.snapshot(&mut self.record, SnapshotMode::Restore);
        self.history.clear();
        debug!(record_id = %self.record.get_id(), "Edit session discarded");
    }

    /// Log field changes ahead of a commit and return the new entries.
    ///
    /// Only edits of existing records are logged; a new record has no prior
    /// state to compare against.
    pub fn prepare_commit(&mut self, group_id: Uuid) -> Vec<ChangeLogEntry<R::Field>> {
        if !self.action.is_auditable() {
            debug!(record_id = %self.record.get_id(), action = %self.action, "Commit produces no change log");
            return Vec::new();
        }
        self.tracker.log(&mut self.record, group_id)
    }

    /// The entries [`Self::prepare_commit`] would log, without attaching
    /// them to the record. Used when the write may still fail.
    pub fn pending_changes(&self, group_id: Uuid) -> Vec<ChangeLogEntry<R::Field>> {
        if !self.action.is_auditable() {
            return Vec::new();
        }
        self.tracker.changes(&self.record, group_id)
    }

    /// The commit was acknowledged: clear the baseline so it cannot be reused
    pub fn acknowledge_commit(&mut self) {
        self.tracker.snapshot(&mut self.record, SnapshotMode::Clear);
        self.history.clear();
        info!(record_id = %self.record.get_id(), action = %self.action, "Commit acknowledged");
    }

    /// Keep editing after a commit: the stored record becomes the new baseline.
    /// A deleted record has nothing left to edit.
    pub fn refresh(&mut self) {
        match self.action {
            ServerAction::Delete => {
                debug!(record_id = %self.record.get_id(), "Record was deleted, nothing to refresh");
                return;
            }
            ServerAction::Add => self.action = ServerAction::Edit,
            ServerAction::Edit => {}
        }
        self.tracker.snapshot(&mut self.record, SnapshotMode::Create);
    }

    pub fn into_record(self) -> R {
        self.record
    }
}
