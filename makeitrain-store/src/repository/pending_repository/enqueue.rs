use makeitrain_api::{ApiError, ServerAction};
use std::error::Error;
use tracing::{debug, warn};

use super::repo_impl::{PendingChange, PendingRepositoryImpl};
use crate::repository::record_repository::StoredRecord;

impl<R: StoredRecord> PendingRepositoryImpl<R> {
    /// Queue a change.
    ///
    /// A change for a record that is already queued takes the earlier one's
    /// place and keeps its baseline hash. A queued `Add` stays an `Add` when
    /// edited and disappears when deleted.
    pub async fn enqueue(&self, change: PendingChange<R>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut queue = self.queue.lock().await;
        let record_id = change.record_id();

        if let Some(position) = queue.iter().position(|queued| queued.record_id() == record_id) {
            match (queue[position].action, change.action) {
                (ServerAction::Add, ServerAction::Delete) => {
                    queue.remove(position);
                    debug!(%record_id, "Queued add cancelled by delete");
                }
                (ServerAction::Add, _) => {
                    let earlier = &mut queue[position];
                    earlier.record = change.record;
                    earlier.queued_at = change.queued_at;
                    debug!(%record_id, "Queued add refreshed");
                }
                (_, action) => {
                    let earlier = &mut queue[position];
                    earlier.record = change.record;
                    earlier.action = action;
                    earlier.queued_at = change.queued_at;
                    debug!(%record_id, %action, "Queued change replaced");
                }
            }
            return Ok(());
        }

        if queue.len() >= self.config.capacity {
            warn!(capacity = self.config.capacity, "Pending queue is full");
            return Err(ApiError::StoreError(format!(
                "pending queue is full ({} changes)",
                self.config.capacity
            ))
            .into());
        }

        debug!(%record_id, action = %change.action, "Change queued");
        queue.push(change);
        Ok(())
    }
}
