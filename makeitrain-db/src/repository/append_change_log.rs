use async_trait::async_trait;

use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::trackable::TrackedField;

/// Repository trait for persisting change log entries.
///
/// Storage is append-only: entries are never updated or removed through this
/// interface, and insertion order is preserved per item.
#[async_trait]
pub trait AppendChangeLog<F: TrackedField>: Send + Sync {
    /// Append entries in the order given
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of entries appended
    /// * `Err` - An error if an entry with the same id was already stored
    async fn append_change_log(
        &self,
        entries: Vec<ChangeLogEntry<F>>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
