use makeitrain_db::models::audit::HasEntityType;
use makeitrain_db::models::trackable::Trackable;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// A tracked record type that can be kept in the store
pub trait StoredRecord: Trackable + HasEntityType + Serialize + Clone + Send + Sync + 'static {}

impl<T> StoredRecord for T where T: Trackable + HasEntityType + Serialize + Clone + Send + Sync + 'static {}

/// Table of the latest stored version of each record, keyed by id.
///
/// Stored versions carry their content hash and the id of the audit log that
/// wrote them, never a change log.
pub struct RecordRepositoryImpl<R: StoredRecord> {
    pub(crate) records: RwLock<HashMap<Uuid, R>>,
}

impl<R: StoredRecord> RecordRepositoryImpl<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: StoredRecord> Default for RecordRepositoryImpl<R> {
    fn default() -> Self {
        Self::new()
    }
}
