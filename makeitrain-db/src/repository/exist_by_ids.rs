use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking existence of multiple records by their IDs
#[async_trait]
pub trait ExistByIds: Send + Sync {
    /// Check existence of multiple records by their unique identifiers
    ///
    /// # Returns
    /// * `Ok(Vec<(Uuid, bool)>)` - Each ID mapped to its existence status, in input order
    /// * `Err` - An error if the lookup could not be executed
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
