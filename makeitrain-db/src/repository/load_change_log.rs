use async_trait::async_trait;
use uuid::Uuid;

use crate::models::audit::change_log::ChangeLogEntry;
use crate::models::trackable::TrackedField;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for loading the change log of a record with pagination
///
/// # Example
/// ```ignore
/// use makeitrain_db::repository::pagination::PageRequest;
///
/// let page = repo.load_change_log(transaction_id, PageRequest::new(20, 0)).await?;
/// for entry in &page.items {
///     println!("{}: {:?} -> {:?}", entry.field_name(), entry.old_value(), entry.new_value());
/// }
/// ```
#[async_trait]
pub trait LoadChangeLog<F: TrackedField>: Send + Sync {
    /// Load paginated change log entries for a record, oldest first
    ///
    /// # Arguments
    /// * `item_id` - The UUID of the record whose entries should be loaded
    /// * `page` - The pagination parameters (limit and offset)
    async fn load_change_log(
        &self,
        item_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ChangeLogEntry<F>>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load every entry produced by one commit, in insertion order
    async fn load_change_group(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<ChangeLogEntry<F>>, Box<dyn std::error::Error + Send + Sync>>;
}
