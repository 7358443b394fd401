use makeitrain_db::models::audit::AuditLogModel;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

pub async fn load_batch_impl(
    logs: &RwLock<HashMap<Uuid, AuditLogModel>>,
    ids: &[Uuid],
) -> Result<Vec<Option<AuditLogModel>>, Box<dyn std::error::Error + Send + Sync>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let logs = logs.read();

    // Results in the same order as input ids
    let result = ids.iter().map(|id| logs.get(id).cloned()).collect();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use makeitrain_db::models::audit::AuditLogModel;
    use makeitrain_db::repository::load_batch::LoadBatch;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_batch_keeps_input_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_log_repo = &ctx.audit_repos().audit_log_repository;

        let first = AuditLogModel::new(Uuid::new_v4());
        let second = AuditLogModel::new(Uuid::new_v4());
        audit_log_repo.create(&first).await?;
        audit_log_repo.create(&second).await?;

        let loaded = audit_log_repo
            .load_batch(&[second.id, Uuid::new_v4(), first.id])
            .await?;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().map(|log| log.id), Some(second.id));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().map(|log| log.id), Some(first.id));

        Ok(())
    }
}
