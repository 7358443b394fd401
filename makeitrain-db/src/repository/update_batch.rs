use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple records in a batch
///
/// All updates are applied atomically.
/// Only updates items that have changed (based on hash comparison).
/// An item whose stored hash no longer matches the hash it was loaded with
/// is rejected as a concurrent update.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// Update multiple items atomically
    ///
    /// # Arguments
    /// * `items` - A vector of records to update
    /// * `audit_log_id` - The UUID of the audit log for tracking this operation
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of updated records
    /// * `Err` - An error if a record is missing or was concurrently modified
    async fn update_batch(
        &self,
        items: Vec<T>,
        audit_log_id: Uuid,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
