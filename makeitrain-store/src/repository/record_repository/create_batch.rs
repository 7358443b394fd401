use async_trait::async_trait;
use makeitrain_api::ApiError;
use makeitrain_db::repository::create_batch::CreateBatch;
use makeitrain_db::utils::content_hash;
use std::collections::HashSet;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::{RecordRepositoryImpl, StoredRecord};

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    pub(super) async fn create_batch_impl(
        &self,
        items: Vec<R>,
        audit_log_id: Uuid,
    ) -> Result<Vec<R>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = self.records.write();

        let mut batch_ids = HashSet::with_capacity(items.len());
        for item in &items {
            let id = item.get_id();
            if records.contains_key(&id) || !batch_ids.insert(id) {
                return Err(ApiError::ValidationError(format!("record {id} already exists")).into());
            }
        }

        let mut saved_items = Vec::with_capacity(items.len());
        for mut item in items {
            item.set_audit_log_id(Some(audit_log_id));
            let hash = content_hash(&item).map_err(ApiError::InternalError)?;
            item.set_hash(hash);

            records.insert(item.get_id(), item.snapshot());
            saved_items.push(item);
        }

        debug!(
            entity_type = <&str>::from(R::ENTITY_TYPE),
            count = saved_items.len(),
            %audit_log_id,
            "Records created"
        );

        Ok(saved_items)
    }
}

#[async_trait]
impl<R: StoredRecord> CreateBatch<R> for RecordRepositoryImpl<R> {
    async fn create_batch(
        &self,
        items: Vec<R>,
        audit_log_id: Uuid,
    ) -> Result<Vec<R>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items, audit_log_id).await
    }
}
