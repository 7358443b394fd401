use makeitrain_db::models::audit::AuditLinkModel;
use uuid::Uuid;

use super::repo_impl::AuditLinkRepositoryImpl;

impl AuditLinkRepositoryImpl {
    pub(super) async fn find_by_audit_log_id_impl(
        repo: &AuditLinkRepositoryImpl,
        audit_log_id: Uuid,
    ) -> Result<Vec<AuditLinkModel>, Box<dyn std::error::Error + Send + Sync>> {
        let links = repo.links.read();
        Ok(links
            .iter()
            .filter(|link| link.audit_log_id == audit_log_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use makeitrain_api::ServerAction;
    use makeitrain_db::models::audit::{AuditEntityType, AuditLinkModel, AuditLogModel};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_find_by_audit_log_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_log_repo = &ctx.audit_repos().audit_log_repository;
        let audit_link_repo = &ctx.audit_repos().audit_link_repository;

        let audit_log = AuditLogModel::new(Uuid::new_v4());
        audit_log_repo.create(&audit_log).await?;

        let transaction_link = AuditLinkModel {
            audit_log_id: audit_log.id,
            entity_id: Uuid::new_v4(),
            entity_type: AuditEntityType::Transaction,
            action: ServerAction::Edit,
        };
        let method_link = AuditLinkModel {
            audit_log_id: audit_log.id,
            entity_id: Uuid::new_v4(),
            entity_type: AuditEntityType::PaymentMethod,
            action: ServerAction::Add,
        };
        audit_link_repo.create(&transaction_link).await?;
        audit_link_repo.create(&method_link).await?;

        let links = audit_link_repo.find_by_audit_log_id(audit_log.id).await?;
        assert_eq!(links, vec![transaction_link.clone(), method_link]);

        assert!(audit_link_repo.create(&transaction_link).await.is_err());
        assert!(audit_link_repo.find_by_audit_log_id(Uuid::new_v4()).await?.is_empty());

        Ok(())
    }
}
