use tracing::debug;
use uuid::Uuid;

use super::repo_impl::{PendingChange, PendingRepositoryImpl};
use crate::repository::record_repository::StoredRecord;

impl<R: StoredRecord> PendingRepositoryImpl<R> {
    /// Queued changes in queue order
    pub async fn pending(&self) -> Vec<PendingChange<R>> {
        self.queue.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.queue.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.queue.lock().await.is_empty()
    }

    /// Drop the queued change of a record; false when nothing was queued for it
    pub async fn remove(&self, record_id: Uuid) -> bool {
        let mut queue = self.queue.lock().await;
        let before = queue.len();
        queue.retain(|change| change.record_id() != record_id);
        let removed = queue.len() < before;
        if removed {
            debug!(%record_id, "Queued change removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::pending_repository::{PendingChange, PendingQueueConfig, PendingRepositoryImpl};
    use makeitrain_api::ServerAction;
    use makeitrain_db::models::finance::payment_method::PaymentMethodModel;
    use makeitrain_db::test_utils::create_test_payment_method;
    use makeitrain_db::tracker::compare::ComparisonPolicy;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_pending_keeps_queue_order_and_remove() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pending_repo: PendingRepositoryImpl<PaymentMethodModel> =
            PendingRepositoryImpl::new(PendingQueueConfig::default(), ComparisonPolicy::default());
        let visa = create_test_payment_method("Visa");
        let amex = create_test_payment_method("Amex");

        pending_repo.enqueue(PendingChange::new(visa.clone(), ServerAction::Add)).await?;
        pending_repo.enqueue(PendingChange::new(amex.clone(), ServerAction::Add)).await?;

        let ids: Vec<Uuid> = pending_repo.pending().await.iter().map(|c| c.record_id()).collect();
        assert_eq!(ids, vec![visa.id, amex.id]);

        assert!(pending_repo.remove(visa.id).await);
        assert!(!pending_repo.remove(visa.id).await);
        assert_eq!(pending_repo.len().await, 1);
        assert!(!pending_repo.is_empty().await);

        Ok(())
    }
}
