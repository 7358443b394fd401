use async_trait::async_trait;
use makeitrain_api::ApiError;
use makeitrain_db::repository::update_batch::UpdateBatch;
use makeitrain_db::utils::content_hash;
use std::error::Error;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use super::repo_impl::{RecordRepositoryImpl, StoredRecord};

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    /// Store new versions of existing records.
    ///
    /// An item whose content still hashes to its `hash` is returned unchanged
    /// and not written. The stored version must still carry the caller's
    /// `hash` and `audit_log_id`, otherwise the whole batch is rejected.
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<R>,
        audit_log_id: Uuid,
    ) -> Result<Vec<R>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = self.records.write();
        let mut updated_items = Vec::with_capacity(items.len());
        let mut writes = Vec::new();

        for mut item in items {
            let id = item.get_id();
            let previous_hash = item.get_hash();
            let previous_audit_log_id = item.get_audit_log_id().ok_or_else(|| {
                ApiError::ValidationError(format!("record {id} must have an audit_log_id for update"))
            })?;

            let computed_hash = content_hash(&item).map_err(ApiError::InternalError)?;
            if computed_hash == previous_hash {
                trace!(record_id = %id, "Record unchanged, update skipped");
                updated_items.push(item);
                continue;
            }

            let stored = records
                .get(&id)
                .ok_or_else(|| ApiError::NotFound(format!("{} {id}", <&str>::from(R::ENTITY_TYPE))))?;
            if stored.get_hash() != previous_hash || stored.get_audit_log_id() != Some(previous_audit_log_id) {
                warn!(record_id = %id, "Stored version moved on since the record was loaded");
                return Err(ApiError::ConcurrentUpdate { entity_id: id }.into());
            }

            item.set_audit_log_id(Some(audit_log_id));
            let new_hash = content_hash(&item).map_err(ApiError::InternalError)?;
            item.set_hash(new_hash);

            writes.push(item.snapshot());
            updated_items.push(item);
        }

        let written = writes.len();
        for item in writes {
            records.insert(item.get_id(), item);
        }
        debug!(
            entity_type = <&str>::from(R::ENTITY_TYPE),
            written,
            skipped = updated_items.len() - written,
            %audit_log_id,
            "Records updated"
        );

        Ok(updated_items)
    }
}

#[async_trait]
impl<R: StoredRecord> UpdateBatch<R> for RecordRepositoryImpl<R> {
    async fn update_batch(
        &self,
        items: Vec<R>,
        audit_log_id: Uuid,
    ) -> Result<Vec<R>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items, audit_log_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{create_test_audit_log, setup_test_context};
    use makeitrain_db::models::auditable::Auditable;
    use makeitrain_db::repository::create_batch::CreateBatch;
    use makeitrain_db::repository::load::Load;
    use makeitrain_db::repository::update_batch::UpdateBatch;
    use makeitrain_db::test_utils::{amount, create_test_transaction, text};

    #[tokio::test]
    async fn test_update_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;

        let create_log = create_test_audit_log();
        let mut saved = transaction_repo
            .create_batch(vec![create_test_transaction("Coffee", "-4.50")], create_log.id)
            .await?;
        let mut transaction = saved.remove(0);
        let created_hash = transaction.get_hash();

        transaction.amount = amount("-4.75");
        let update_log = create_test_audit_log();
        let updated = transaction_repo.update_batch(vec![transaction], update_log.id).await?;

        assert_eq!(updated[0].get_audit_log_id(), Some(update_log.id));
        assert_ne!(updated[0].get_hash(), created_hash);

        let loaded = transaction_repo.load(updated[0].id).await?;
        assert_eq!(loaded.amount, amount("-4.75"));
        assert_eq!(loaded.get_hash(), updated[0].get_hash());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_batch_skips_unchanged() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;

        let create_log = create_test_audit_log();
        let saved = transaction_repo
            .create_batch(vec![create_test_transaction("Coffee", "-4.50")], create_log.id)
            .await?;

        let updated = transaction_repo
            .update_batch(saved.clone(), create_test_audit_log().id)
            .await?;
        assert_eq!(updated[0].get_audit_log_id(), Some(create_log.id));
        assert_eq!(updated[0].get_hash(), saved[0].get_hash());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_batch_detects_concurrent_update() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;

        let saved = transaction_repo
            .create_batch(vec![create_test_transaction("Coffee", "-4.50")], create_test_audit_log().id)
            .await?;

        let mut first_device = saved[0].clone();
        let mut second_device = saved[0].clone();

        first_device.title = text("Coffee Shop");
        transaction_repo
            .update_batch(vec![first_device], create_test_audit_log().id)
            .await?;

        second_device.notes = text("with oat milk");
        let result = transaction_repo
            .update_batch(vec![second_device], create_test_audit_log().id)
            .await;
        let err = result.err().ok_or("expected a concurrent update error")?;
        assert!(err.to_string().starts_with("Concurrent update detected"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_batch_requires_stored_version() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;

        let never_stored = create_test_transaction("Coffee", "-4.50");
        let result = transaction_repo
            .update_batch(vec![never_stored], create_test_audit_log().id)
            .await;
        assert!(result.is_err());

        Ok(())
    }
}
