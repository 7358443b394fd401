use makeitrain_api::ApiError;
use makeitrain_db::models::audit::AuditLinkModel;
use tracing::debug;

use super::repo_impl::AuditLinkRepositoryImpl;

impl AuditLinkRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AuditLinkRepositoryImpl,
        audit_link: &AuditLinkModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut links = repo.links.write();
        let duplicate = links
            .iter()
            .any(|link| link.audit_log_id == audit_link.audit_log_id && link.entity_id == audit_link.entity_id);
        if duplicate {
            return Err(ApiError::ValidationError(format!(
                "entity {} already linked to audit log {}",
                audit_link.entity_id, audit_link.audit_log_id
            ))
            .into());
        }
        links.push(audit_link.clone());
        debug!(
            audit_log_id = %audit_link.audit_log_id,
            entity_id = %audit_link.entity_id,
            action = %audit_link.action,
            "Audit link recorded"
        );

        Ok(())
    }
}
