use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading multiple records by their IDs
///
/// Returns items in the same order as the provided IDs.
/// Missing items are represented as None in the result.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
#[async_trait]
pub trait LoadBatch<T: Identifiable>: Send + Sync {
    /// Load multiple records by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the records to load
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - Optional records in the same order as the provided IDs
    ///   - `Some(T)` for records that exist
    ///   - `None` for records that do not exist
    /// * `Err` - An error if the lookup could not be executed
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}
