use uuid::Uuid;

use super::audit::change_log::ChangeLogEntry;
use super::identifiable::Identifiable;
use super::trackable::TrackedField;

/// Trait for records that keep a field-level change log and persistence bookkeeping
pub trait Auditable: Identifiable {
    /// Closed set of fields participating in change detection for this record type
    type Field: TrackedField;

    /// Returns the ID of the audit log of the last stored version, if any
    fn get_audit_log_id(&self) -> Option<Uuid>;

    fn set_audit_log_id(&mut self, audit_log_id: Option<Uuid>);

    /// Content hash of the last stored version (0 until stored)
    fn get_hash(&self) -> i64;

    fn set_hash(&mut self, hash: i64);

    /// Change log entries in insertion order
    fn change_log(&self) -> &[ChangeLogEntry<Self::Field>];

    /// Appends to the change log. Existing entries are never touched.
    fn append_change_log(&mut self, entries: Vec<ChangeLogEntry<Self::Field>>);
}
