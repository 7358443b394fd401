use chrono::{DateTime, Utc};
use makeitrain_api::ServerAction;
use makeitrain_db::tracker::compare::ComparisonPolicy;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::repository::record_repository::StoredRecord;

pub const DEFAULT_PENDING_CAPACITY: usize = 500;

/// Limits of the offline queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQueueConfig {
    pub capacity: usize,
}

impl PendingQueueConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for PendingQueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PENDING_CAPACITY)
    }
}

/// A committed change that has not reached the server yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingChange<R> {
    pub record: R,
    pub action: ServerAction,
    pub queued_at: DateTime<Utc>,

    /// Hash of the server version the edit started from (0 for new records)
    pub baseline_hash: i64,
}

impl<R: StoredRecord> PendingChange<R> {
    pub fn new(record: R, action: ServerAction) -> Self {
        let baseline_hash = record.get_hash();
        Self {
            record,
            action,
            queued_at: Utc::now(),
            baseline_hash,
        }
    }

    pub fn record_id(&self) -> Uuid {
        self.record.get_id()
    }
}

/// How a queued change relates to the current server copy of its record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Safe to send as is
    Apply,
    /// The server copy moved on and its significant fields disagree
    Conflict { fields: Vec<String>, count: usize },
    /// The record no longer exists on the server
    AlreadyDeleted,
}

/// Offline queue of committed changes for one record type, in queue order
pub struct PendingRepositoryImpl<R: StoredRecord> {
    pub(crate) queue: Mutex<Vec<PendingChange<R>>>,
    pub(crate) config: PendingQueueConfig,
    pub(crate) policy: ComparisonPolicy,
}

impl<R: StoredRecord> PendingRepositoryImpl<R> {
    pub fn new(config: PendingQueueConfig, policy: ComparisonPolicy) -> Self {
        Self {
            queue: Mutex::new(Vec::new()),
            config,
            policy,
        }
    }

    pub fn config(&self) -> PendingQueueConfig {
        self.config
    }
}
