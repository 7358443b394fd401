use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading records by their ID
///
/// Any record that implements the Identifiable trait can be loaded using this trait.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<TransactionModel> for TransactionRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<TransactionModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load a record by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the record to load
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded record
    /// * `Err` - An error if the record does not exist or could not be loaded
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
