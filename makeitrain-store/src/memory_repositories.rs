use makeitrain_db::models::auditable::Auditable;
use makeitrain_db::models::finance::payment_method::PaymentMethodModel;
use makeitrain_db::models::finance::transaction::TransactionModel;
use makeitrain_db::TrackerConfig;
use std::sync::Arc;
use tracing::info;

use crate::repository::audit::{AuditRepoFactory, AuditRepositories};
use crate::repository::change_log_repository::ChangeLogRepositoryImpl;
use crate::repository::pending_repository::{PendingQueueConfig, PendingRepositoryImpl};
use crate::repository::record_repository::{RecordRepositoryImpl, StoredRecord};

pub struct MemoryRepositories {
    tracker_config: TrackerConfig,
    pending_config: PendingQueueConfig,
}

impl MemoryRepositories {
    pub fn new(tracker_config: TrackerConfig, pending_config: PendingQueueConfig) -> Self {
        Self {
            tracker_config,
            pending_config,
        }
    }

    /// Settings taken from the process environment
    pub fn from_env() -> Self {
        Self::new(TrackerConfig::from_env(), PendingQueueConfig::default())
    }

    pub fn tracker_config(&self) -> &TrackerConfig {
        &self.tracker_config
    }

    pub fn create_audit_repositories(&self) -> AuditRepositories {
        AuditRepoFactory::new().build_all_repos()
    }

    /// Record table, change log and offline queue for one record type
    pub fn create_record_store<R: StoredRecord>(&self) -> RecordStore<R> {
        RecordStore {
            record_repository: Arc::new(RecordRepositoryImpl::new()),
            change_log_repository: Arc::new(ChangeLogRepositoryImpl::new()),
            pending_repository: Arc::new(PendingRepositoryImpl::new(
                self.pending_config,
                self.tracker_config.comparison_policy(),
            )),
        }
    }

    /// Create every repository of the store, sharing nothing with earlier calls
    pub fn create_all_repositories(&self) -> StoreRepositories {
        info!(
            pending_capacity = self.pending_config.capacity,
            coordinate_tolerance = ?self.tracker_config.coordinate_tolerance,
            "Creating in-memory repositories"
        );
        StoreRepositories {
            audit: self.create_audit_repositories(),
            transactions: self.create_record_store(),
            payment_methods: self.create_record_store(),
        }
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new(TrackerConfig::default(), PendingQueueConfig::default())
    }
}

/// Repositories of one record type
pub struct RecordStore<R: StoredRecord> {
    pub record_repository: Arc<RecordRepositoryImpl<R>>,
    pub change_log_repository: Arc<ChangeLogRepositoryImpl<<R as Auditable>::Field>>,
    pub pending_repository: Arc<PendingRepositoryImpl<R>>,
}

/// Container for all repositories of the store
pub struct StoreRepositories {
    pub audit: AuditRepositories,
    pub transactions: RecordStore<TransactionModel>,
    pub payment_methods: RecordStore<PaymentMethodModel>,
}

/// Access to the repositories a commit of `R` writes to
pub trait RecordRepositories<R: StoredRecord> {
    fn audit_repositories(&self) -> &AuditRepositories;

    fn record_store(&self) -> &RecordStore<R>;
}

impl RecordRepositories<TransactionModel> for StoreRepositories {
    fn audit_repositories(&self) -> &AuditRepositories {
        &self.audit
    }

    fn record_store(&self) -> &RecordStore<TransactionModel> {
        &self.transactions
    }
}

impl RecordRepositories<PaymentMethodModel> for StoreRepositories {
    fn audit_repositories(&self) -> &AuditRepositories {
        &self.audit
    }

    fn record_store(&self) -> &RecordStore<PaymentMethodModel> {
        &self.payment_methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use makeitrain_db::repository::create_batch::CreateBatch;
    use makeitrain_db::test_utils::create_test_transaction;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_repository_sets_are_isolated() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let factory = MemoryRepositories::default();
        let first = factory.create_all_repositories();
        let second = factory.create_all_repositories();

        first
            .transactions
            .record_repository
            .create_batch(vec![create_test_transaction("Coffee", "-4.50")], Uuid::new_v4())
            .await?;

        assert_eq!(first.transactions.record_repository.len(), 1);
        assert!(second.transactions.record_repository.is_empty());
        assert!(first.payment_methods.record_repository.is_empty());

        Ok(())
    }

    #[test]
    fn test_pending_queue_uses_configured_capacity() {
        let factory = MemoryRepositories::new(TrackerConfig::default(), PendingQueueConfig::new(3));
        let store: RecordStore<TransactionModel> = factory.create_record_store();
        assert_eq!(store.pending_repository.config().capacity, 3);
    }
}
