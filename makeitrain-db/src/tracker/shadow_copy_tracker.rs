use tracing::{debug, trace};
use uuid::Uuid;

use super::compare::ComparisonPolicy;
use super::diff::{self, ChangeSummary};
use super::render::FieldRenderer;
use super::shadow_copy::{ShadowCopy, SnapshotMode};
use crate::config::TrackerConfig;
use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::trackable::{Trackable, TrackedField};

/// Holds the shadow copy of one record under edit and answers change
/// questions about it.
///
/// Single-writer: one tracker per record per edit surface. Callers sharing a
/// record across threads serialise access per record id themselves.
#[derive(Debug, Clone)]
pub struct ShadowCopyTracker<R: Trackable> {
    shadow: Option<ShadowCopy<R>>,
    policy: ComparisonPolicy,
    renderer: FieldRenderer,
}

impl<R: Trackable> Default for ShadowCopyTracker<R> {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

impl<R: Trackable> ShadowCopyTracker<R> {
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_rules(config.comparison_policy(), config.renderer())
    }

    pub fn with_rules(policy: ComparisonPolicy, renderer: FieldRenderer) -> Self {
        Self {
            shadow: None,
            policy,
            renderer,
        }
    }

    /// Apply a snapshot lifecycle action.
    ///
    /// - `Create` replaces any previous shadow copy
    /// - `Restore` without a shadow copy, or with a cleared one, leaves the
    ///   record untouched
    /// - `Clear` without a shadow copy does nothing
    pub fn snapshot(&mut self, record: &mut R, mode: SnapshotMode) {
        match mode {
            SnapshotMode::Create => {
                if self.shadow.is_some() {
                    trace!(record_id = %record.get_id(), "Replacing existing shadow copy");
                }
                self.shadow = Some(ShadowCopy::capture(record));
                debug!(record_id = %record.get_id(), "Shadow copy created");
            }
            SnapshotMode::Restore => match &self.shadow {
                Some(shadow) if shadow.is_cleared() => {
                    debug!(record_id = %record.get_id(), "Shadow copy was cleared, nothing restored");
                }
                Some(shadow) if shadow.belongs_to(record) => {
                    shadow.restore_onto(record);
                    debug!(record_id = %record.get_id(), "Record restored from shadow copy");
                }
                Some(_) => {
                    debug!(record_id = %record.get_id(), "Shadow copy belongs to another record, nothing restored");
                }
                None => {
                    debug!(record_id = %record.get_id(), "No shadow copy, nothing to restore");
                }
            },
            SnapshotMode::Clear => {
                if let Some(shadow) = self.shadow.as_mut() {
                    shadow.clear();
                    debug!(record_id = %record.get_id(), "Shadow copy cleared");
                }
            }
        }
    }

    pub fn shadow(&self) -> Option<&ShadowCopy<R>> {
        self.shadow.as_ref()
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow.is_some()
    }

    /// Drop the shadow copy, ending the tracked session
    pub fn discard_shadow(&mut self) {
        self.shadow = None;
    }

    pub fn policy(&self) -> &ComparisonPolicy {
        &self.policy
    }

    pub fn renderer(&self) -> &FieldRenderer {
        &self.renderer
    }

    /// `true` when any tracked field differs from the shadow copy, or when
    /// there is no shadow copy to compare against
    pub fn has_changes(&self, record: &R) -> bool {
        diff::has_changes(record, self.shadow.as_ref(), &self.policy)
    }

    /// Fields differing from the shadow copy; every tracked field when there
    /// is no usable one
    pub fn changed_fields(&self, record: &R) -> Vec<R::Field> {
        match diff::usable_baseline(record, self.shadow.as_ref()) {
            Some(baseline) => diff::changed_fields(record, baseline, &self.policy),
            None => R::Field::ALL.to_vec(),
        }
    }

    /// Change log entries for every field differing from the shadow copy,
    /// without touching the record
    pub fn changes(&self, record: &R, group_id: Uuid) -> Vec<ChangeLogEntry<R::Field>> {
        diff::collect_changes(record, self.shadow.as_ref(), group_id, &self.policy, &self.renderer)
    }

    /// Append change log entries for every field differing from the shadow copy
    pub fn log(&self, record: &mut R, group_id: Uuid) -> Vec<ChangeLogEntry<R::Field>> {
        diff::log_changes(record, self.shadow.as_ref(), group_id, &self.policy, &self.renderer)
    }

    /// Significant-field comparison of two independently obtained copies
    pub fn get_changes(&self, record: &R, other: &R) -> ChangeSummary {
        diff::get_changes(record, other, &self.policy)
    }
}
