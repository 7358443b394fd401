use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple records in a batch
///
/// All creates are applied atomically. Returns saved items with the
/// persistence bookkeeping (`hash`, `audit_log_id`) populated.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<TransactionModel> for TransactionRepositoryImpl {
///     async fn create_batch(&self, items: Vec<TransactionModel>, audit_log_id: Uuid) -> Result<Vec<TransactionModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Save multiple items atomically
    ///
    /// # Arguments
    /// * `items` - A vector of records to create
    /// * `audit_log_id` - The UUID of the audit log the creation belongs to
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created records
    /// * `Err` - An error if a record with the same id already exists
    async fn create_batch(
        &self,
        items: Vec<T>,
        audit_log_id: Uuid,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
