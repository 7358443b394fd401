use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditEntityType;
use makeitrain_api::ServerAction;

/// # Documentation
/// - Tracks every record touched by one commit, and how it was touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLinkModel {
    pub audit_log_id: Uuid,
    pub entity_id: Uuid,
    pub entity_type: AuditEntityType,
    pub action: ServerAction,
}
