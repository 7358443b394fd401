use makeitrain_api::ServerAction;
use makeitrain_db::tracker::diff::get_changes;
use tracing::{info, warn};

use super::repo_impl::{PendingChange, PendingRepositoryImpl, Reconciliation};
use crate::repository::record_repository::StoredRecord;

impl<R: StoredRecord> PendingRepositoryImpl<R> {
    /// Decide whether a queued change can still be sent, given the server's
    /// current copy of its record.
    ///
    /// A server copy still carrying the change's baseline hash was not touched
    /// by anyone else. Otherwise the significant fields of both copies are
    /// compared and any difference is a conflict.
    pub fn reconcile(&self, change: &PendingChange<R>, server_copy: Option<&R>) -> Reconciliation {
        let record_id = change.record_id();
        let outcome = match (change.action, server_copy) {
            (ServerAction::Add, None) => Reconciliation::Apply,
            (_, None) => Reconciliation::AlreadyDeleted,
            (_, Some(server)) if server.get_hash() == change.baseline_hash => Reconciliation::Apply,
            (_, Some(server)) => {
                let summary = get_changes(&change.record, server, &self.policy);
                if summary.is_empty() {
                    Reconciliation::Apply
                } else {
                    Reconciliation::Conflict {
                        fields: summary.field_names,
                        count: summary.count,
                    }
                }
            }
        };

        match &outcome {
            Reconciliation::Apply => info!(%record_id, action = %change.action, "Queued change can be applied"),
            Reconciliation::Conflict { count, .. } => {
                warn!(%record_id, conflicting_fields = count, "Queued change conflicts with server copy")
            }
            Reconciliation::AlreadyDeleted => warn!(%record_id, "Record deleted on the server"),
        }
        outcome
    }
}
