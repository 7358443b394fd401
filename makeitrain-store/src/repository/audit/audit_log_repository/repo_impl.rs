use async_trait::async_trait;
use makeitrain_api::ApiError;
use makeitrain_db::{
    models::audit::AuditLogModel,
    repository::{load::Load, load_batch::LoadBatch},
};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

pub struct AuditLogRepositoryImpl {
    pub(crate) logs: RwLock<HashMap<Uuid, AuditLogModel>>,
}

impl AuditLogRepositoryImpl {
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, audit_log: &AuditLogModel) -> Result<AuditLogModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::create_impl(self, audit_log).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Self::remove_impl(self, id).await
    }

    pub fn len(&self) -> usize {
        self.logs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.read().is_empty()
    }
}

impl Default for AuditLogRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Load<AuditLogModel> for AuditLogRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<AuditLogModel, Box<dyn std::error::Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("audit log {id}")).into())
    }
}

#[async_trait]
impl LoadBatch<AuditLogModel> for AuditLogRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AuditLogModel>>, Box<dyn std::error::Error + Send + Sync>> {
        super::load_batch::load_batch_impl(&self.logs, ids).await
    }
}
