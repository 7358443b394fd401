use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::trackable::TrackedField;

/// One field-level change detected when a record is committed.
///
/// Entries are immutable once built: fields are only readable through
/// accessors. `group_id` is shared by every entry produced by the same
/// commit and equals the id of that commit's audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry<F> {
    id: Uuid,
    item_id: Uuid,
    field: F,
    old_value: Option<String>,
    new_value: Option<String>,
    group_id: Uuid,
    created_at: DateTime<Utc>,
}

impl<F: TrackedField> ChangeLogEntry<F> {
    pub fn new(
        item_id: Uuid,
        field: F,
        old_value: Option<String>,
        new_value: Option<String>,
        group_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            field,
            old_value,
            new_value,
            group_id,
            created_at: Utc::now(),
        }
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn field_name(&self) -> &'static str {
        self.field.name()
    }

    pub fn old_value(&self) -> Option<&str> {
        self.old_value.as_deref()
    }

    pub fn new_value(&self) -> Option<&str> {
        self.new_value.as_deref()
    }

    pub fn group_id(&self) -> Uuid {
        self.group_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<F> Identifiable for ChangeLogEntry<F> {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
