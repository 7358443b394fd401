use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use super::compare::ComparisonPolicy;
use super::render::FieldRenderer;
use super::shadow_copy::ShadowCopy;
use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::trackable::{Trackable, TrackedField};

/// Result of comparing two independently obtained copies of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub field_names: Vec<String>,
    pub count: usize,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Every tracked field of `record` that differs from `baseline`, in declaration order
pub fn changed_fields<R: Trackable>(record: &R, baseline: &R, policy: &ComparisonPolicy) -> Vec<R::Field> {
    R::Field::ALL
        .iter()
        .copied()
        .filter(|field| record.field_differs(baseline, *field, policy))
        .collect()
}

/// The shadow copy's state when it can serve as a baseline for `record`.
///
/// A missing shadow copy, one taken from another record and one reset by
/// `Clear` are all unusable.
pub fn usable_baseline<'a, R: Trackable>(record: &R, shadow: Option<&'a ShadowCopy<R>>) -> Option<&'a R> {
    let Some(shadow) = shadow else {
        trace!(record_id = %record.get_id(), "No shadow copy");
        return None;
    };
    if !shadow.belongs_to(record) {
        warn!(record_id = %record.get_id(), "Shadow copy belongs to another record");
        return None;
    }
    if shadow.is_cleared() {
        debug!(record_id = %record.get_id(), "Shadow copy was cleared by a commit");
        return None;
    }
    Some(shadow.state())
}

/// Dirty check. Stops at the first differing field.
///
/// Without a usable baseline the record is reported as changed so a save is
/// never suppressed.
pub fn has_changes<R: Trackable>(record: &R, shadow: Option<&ShadowCopy<R>>, policy: &ComparisonPolicy) -> bool {
    let Some(baseline) = usable_baseline(record, shadow) else {
        return true;
    };
    R::Field::ALL
        .iter()
        .any(|field| record.field_differs(baseline, *field, policy))
}

/// One change log entry per differing tracked field, all tagged with
/// `group_id`. The record is left untouched.
///
/// Without a usable baseline there are no entries.
pub fn collect_changes<R: Trackable>(
    record: &R,
    shadow: Option<&ShadowCopy<R>>,
    group_id: Uuid,
    policy: &ComparisonPolicy,
    renderer: &FieldRenderer,
) -> Vec<ChangeLogEntry<R::Field>> {
    let Some(baseline) = usable_baseline(record, shadow) else {
        debug!(record_id = %record.get_id(), "No usable baseline, nothing to log");
        return Vec::new();
    };

    changed_fields(record, baseline, policy)
        .into_iter()
        .map(|field| {
            ChangeLogEntry::new(
                record.get_id(),
                field,
                baseline.render_field(field, renderer),
                record.render_field(field, renderer),
                group_id,
            )
        })
        .collect()
}

/// Append the entries of [`collect_changes`] to the record's change log and
/// return them.
pub fn log_changes<R: Trackable>(
    record: &mut R,
    shadow: Option<&ShadowCopy<R>>,
    group_id: Uuid,
    policy: &ComparisonPolicy,
    renderer: &FieldRenderer,
) -> Vec<ChangeLogEntry<R::Field>> {
    let entries = collect_changes(record, shadow, group_id, policy, renderer);
    debug!(
        record_id = %record.get_id(),
        %group_id,
        count = entries.len(),
        "Logged field changes"
    );
    if !entries.is_empty() {
        record.append_change_log(entries.clone());
    }
    entries
}

/// Compare the significant fields of two copies of a record, for example a
/// pending local edit against the version just fetched from the server.
pub fn get_changes<R: Trackable>(record: &R, other: &R, policy: &ComparisonPolicy) -> ChangeSummary {
    let field_names: Vec<String> = R::SIGNIFICANT
        .iter()
        .filter(|field| record.field_differs(other, **field, policy))
        .map(|field| field.name().to_string())
        .collect();
    let count = field_names.len();
    ChangeSummary { field_names, count }
}
