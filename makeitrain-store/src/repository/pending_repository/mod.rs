pub mod enqueue;
pub mod pending;
pub mod reconcile;
pub mod repo_impl;

pub use repo_impl::{PendingChange, PendingQueueConfig, PendingRepositoryImpl, Reconciliation, DEFAULT_PENDING_CAPACITY};
