use async_trait::async_trait;
use makeitrain_api::ApiError;
use makeitrain_db::repository::load::Load;
use makeitrain_db::repository::load_batch::LoadBatch;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{RecordRepositoryImpl, StoredRecord};

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    pub(super) async fn load_batch_impl(
        repo: &RecordRepositoryImpl<R>,
        ids: &[Uuid],
    ) -> Result<Vec<Option<R>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = repo.records.read();
        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(records.get(id).cloned());
        }
        Ok(result)
    }
}

#[async_trait]
impl<R: StoredRecord> LoadBatch<R> for RecordRepositoryImpl<R> {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<R>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[async_trait]
impl<R: StoredRecord> Load<R> for RecordRepositoryImpl<R> {
    async fn load(&self, id: Uuid) -> Result<R, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("{} {id}", <&str>::from(R::ENTITY_TYPE))).into())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{create_test_audit_log, setup_test_context};
    use makeitrain_db::repository::create_batch::CreateBatch;
    use makeitrain_db::repository::load::Load;
    use makeitrain_db::repository::load_batch::LoadBatch;
    use makeitrain_db::test_utils::create_test_transaction;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;
        let audit_log = create_test_audit_log();

        let mut transactions = Vec::new();
        for i in 0..3 {
            transactions.push(create_test_transaction(&format!("Coffee #{i}"), "-4.50"));
        }
        let saved = transaction_repo.create_batch(transactions, audit_log.id).await?;

        let ids: Vec<Uuid> = saved.iter().map(|s| s.id).collect();
        let loaded = transaction_repo.load_batch(&ids).await?;

        assert_eq!(loaded.len(), 3);
        for (item, expected) in loaded.into_iter().zip(&saved) {
            let transaction = item.ok_or("missing transaction")?;
            assert_eq!(transaction.title, expected.title);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_load_batch_with_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let transaction_repo = &ctx.transactions().record_repository;
        let audit_log = create_test_audit_log();

        let saved = transaction_repo
            .create_batch(vec![create_test_transaction("Coffee", "-4.50")], audit_log.id)
            .await?;

        let ids = vec![saved[0].id, Uuid::new_v4()];
        let loaded = transaction_repo.load_batch(&ids).await?;

        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].is_some());
        assert!(loaded[1].is_none());

        let missing = transaction_repo.load(Uuid::new_v4()).await;
        assert!(missing.is_err());

        Ok(())
    }
}
