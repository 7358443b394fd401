use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for deleting multiple records in a batch
///
/// Returns the number of items actually deleted; unknown ids are skipped.
#[async_trait]
pub trait DeleteBatch: Send + Sync {
    /// Delete multiple items by their IDs
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the records to delete
    /// * `audit_log_id` - The UUID of the audit log for tracking this operation
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the delete could not be executed
    async fn delete_batch(
        &self,
        ids: &[Uuid],
        audit_log_id: Uuid,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
