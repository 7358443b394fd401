use async_trait::async_trait;
use makeitrain_db::repository::exist_by_ids::ExistByIds;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{RecordRepositoryImpl, StoredRecord};

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    pub(super) async fn exist_by_ids_impl(
        repo: &RecordRepositoryImpl<R>,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        let records = repo.records.read();
        Ok(ids.iter().map(|id| (*id, records.contains_key(id))).collect())
    }
}

#[async_trait]
impl<R: StoredRecord> ExistByIds for RecordRepositoryImpl<R> {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}
