pub mod commit;
pub mod memory_repositories;
pub mod repository;

pub use commit::{commit_session, CommitOutcome};
pub use memory_repositories::{MemoryRepositories, RecordRepositories, RecordStore, StoreRepositories};
pub use repository::audit::audit_log_repository::AuditLogRepositoryImpl;
pub use repository::pending_repository::{PendingChange, PendingQueueConfig, Reconciliation};

#[cfg(test)]
pub mod test_helper;
