use tracing::debug;
use uuid::Uuid;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    /// Drop an audit log whose commit failed before anything referenced it.
    /// Returns whether the log existed.
    pub(super) async fn remove_impl(
        repo: &AuditLogRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let removed = repo.logs.write().remove(&id).is_some();
        debug!(audit_log_id = %id, removed, "Audit log removed");
        Ok(removed)
    }
}
