use makeitrain_api::ApiError;
use makeitrain_db::models::audit::AuditLogModel;
use tracing::debug;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AuditLogRepositoryImpl,
        audit_log: &AuditLogModel,
    ) -> Result<AuditLogModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut logs = repo.logs.write();
        if logs.contains_key(&audit_log.id) {
            return Err(ApiError::ValidationError(format!("audit log {} already exists", audit_log.id)).into());
        }
        logs.insert(audit_log.id, audit_log.clone());
        debug!(audit_log_id = %audit_log.id, user_id = %audit_log.updated_by_user_id, "Audit log created");

        Ok(audit_log.clone())
    }
}
