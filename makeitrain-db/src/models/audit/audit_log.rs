use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - One audit log per commit; every record written by the commit references it.
/// - Its `id` doubles as the `group_id` of the change log entries the commit produced,
///   so a UI can present them as one batch.
/// - Created by the client before the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by_user_id: Uuid,
}

impl AuditLogModel {
    pub fn new(updated_by_user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            updated_at: Utc::now(),
            updated_by_user_id,
        }
    }
}

impl Identifiable for AuditLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
