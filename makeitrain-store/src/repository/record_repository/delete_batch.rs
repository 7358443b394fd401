use async_trait::async_trait;
use makeitrain_db::repository::delete_batch::DeleteBatch;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::{RecordRepositoryImpl, StoredRecord};

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    pub(super) async fn delete_batch_impl(
        repo: &RecordRepositoryImpl<R>,
        ids: &[Uuid],
        audit_log_id: Uuid,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut records = repo.records.write();
        let mut deleted_count = 0;
        for id in ids {
            if records.remove(id).is_some() {
                deleted_count += 1;
            }
        }

        debug!(
            entity_type = <&str>::from(R::ENTITY_TYPE),
            deleted_count,
            %audit_log_id,
            "Records deleted"
        );

        Ok(deleted_count)
    }
}

#[async_trait]
impl<R: StoredRecord> DeleteBatch for RecordRepositoryImpl<R> {
    async fn delete_batch(&self, ids: &[Uuid], audit_log_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids, audit_log_id).await
    }
}
