use makeitrain_api::ServerAction;
use makeitrain_db::models::audit::{AuditLinkModel, AuditLogModel};
use makeitrain_db::repository::{AppendChangeLog, CreateBatch, DeleteBatch, UpdateBatch};
use makeitrain_db::tracker::session::EditSession;
use std::error::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::memory_repositories::RecordRepositories;
use crate::repository::record_repository::StoredRecord;

/// What a commit wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Audit log of the commit, also the group id of its change log entries
    pub audit_log_id: Uuid,
    pub entry_count: usize,
}

/// Write the record of an edit session.
///
/// Returns `None` without writing anything when the session has nothing to
/// save. Otherwise one audit log is created, the record is created, updated
/// or deleted according to the session's action, the change log entries of
/// an edit are stored under the audit log id and the session's baseline is
/// cleared.
///
/// The entries are attached to the session's record only once the record
/// write succeeded. A failed write removes the audit log again and leaves the
/// session as it was, so the commit can be retried.
pub async fn commit_session<R, S>(
    session: &mut EditSession<R>,
    repos: &S,
    updated_by: Uuid,
) -> Result<Option<CommitOutcome>, Box<dyn Error + Send + Sync>>
where
    R: StoredRecord,
    S: RecordRepositories<R> + Sync,
{
    let record_id = session.record().get_id();
    let action = session.action();
    if !session.can_save() {
        debug!(%record_id, "Nothing to save, commit skipped");
        return Ok(None);
    }

    let audit_repos = repos.audit_repositories();
    let store = repos.record_store();

    let audit_log = AuditLogModel::new(updated_by);
    audit_repos.audit_log_repository.create(&audit_log).await?;
    let group_id = audit_log.id;

    let entries = session.pending_changes(group_id);

    let written = match action {
        ServerAction::Add => store
            .record_repository
            .create_batch(vec![session.record().clone()], group_id)
            .await
            .map(Some),
        ServerAction::Edit => store
            .record_repository
            .update_batch(vec![session.record().clone()], group_id)
            .await
            .map(Some),
        ServerAction::Delete => store
            .record_repository
            .delete_batch(&[record_id], group_id)
            .await
            .map(|_| None),
    };
    let saved = match written {
        Ok(saved) => saved,
        Err(err) => {
            warn!(%record_id, %action, audit_log_id = %group_id, error = %err, "Record write failed, audit log dropped");
            audit_repos.audit_log_repository.remove(group_id).await?;
            return Err(err);
        }
    };
    if let Some(saved) = saved {
        adopt_stored_version(session, saved);
    }

    let entry_count = store.change_log_repository.append_change_log(entries.clone()).await?;
    if !entries.is_empty() {
        session.record_mut().append_change_log(entries);
    }
    audit_repos
        .audit_link_repository
        .create(&AuditLinkModel {
            audit_log_id: group_id,
            entity_id: record_id,
            entity_type: R::ENTITY_TYPE,
            action,
        })
        .await?;

    session.acknowledge_commit();
    info!(%record_id, %action, audit_log_id = %group_id, entry_count, "Record committed");

    Ok(Some(CommitOutcome {
        audit_log_id: group_id,
        entry_count,
    }))
}

/// Carry the hash and audit log id of the stored version back onto the session's record
fn adopt_stored_version<R: StoredRecord>(session: &mut EditSession<R>, saved: Vec<R>) {
    if let Some(stored) = saved.into_iter().next() {
        let record = session.record_mut();
        record.set_hash(stored.get_hash());
        record.set_audit_log_id(stored.get_audit_log_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;
    use makeitrain_db::models::auditable::Auditable;
    use makeitrain_db::models::finance::payment_method::PaymentMethodField;
    use makeitrain_db::models::finance::transaction::{TransactionField, TransactionModel};
    use makeitrain_db::repository::load::Load;
    use makeitrain_db::repository::load_change_log::LoadChangeLog;
    use makeitrain_db::repository::pagination::PageRequest;
    use makeitrain_db::repository::ExistByIds;
    use makeitrain_db::test_utils::{amount, create_test_payment_method, create_test_transaction, text};
    use makeitrain_db::TrackerConfig;
    use tokio_test::assert_ok;

    fn begin(record: TransactionModel, action: ServerAction) -> EditSession<TransactionModel> {
        EditSession::begin(record, action, &TrackerConfig::default())
    }

    #[tokio::test]
    async fn test_commit_add_then_edit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut session = begin(create_test_transaction("Coffee", "-4.50"), ServerAction::Add);
        let added = commit_session(&mut session, &ctx.repos, user_id)
            .await?
            .ok_or("add should be written")?;
        assert_eq!(added.entry_count, 0);

        let stored = ctx.transactions().record_repository.load(session.record().id).await?;
        assert_eq!(stored.get_hash(), session.record().get_hash());

        session.refresh();
        session.record_mut().title = text("Coffee Shop");
        session.record_mut().amount = amount("-4.75");
        let edited = commit_session(&mut session, &ctx.repos, user_id)
            .await?
            .ok_or("edit should be written")?;
        assert_eq!(edited.entry_count, 2);

        let group = ctx
            .transactions()
            .change_log_repository
            .load_change_group(edited.audit_log_id)
            .await?;
        let fields: Vec<TransactionField> = group.iter().map(|entry| entry.field()).collect();
        assert_eq!(fields, vec![TransactionField::Title, TransactionField::Amount]);
        assert_eq!(group[0].old_value(), Some("Coffee"));
        assert_eq!(group[0].new_value(), Some("Coffee Shop"));
        assert_eq!(group[1].new_value(), Some("-4.75"));

        let links = ctx
            .audit_repos()
            .audit_link_repository
            .find_by_audit_log_id(edited.audit_log_id)
            .await?;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].action, ServerAction::Edit);

        let stored = ctx.transactions().record_repository.load(session.record().id).await?;
        assert_eq!(stored.title.as_str(), "Coffee Shop");
        assert_eq!(stored.get_audit_log_id(), Some(edited.audit_log_id));

        Ok(())
    }

    #[tokio::test]
    async fn test_commit_without_changes_writes_nothing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut add = begin(create_test_transaction("Coffee", "-4.50"), ServerAction::Add);
        commit_session(&mut add, &ctx.repos, user_id).await?;
        let stored = add.into_record();

        let mut edit = begin(stored, ServerAction::Edit);
        let outcome = assert_ok!(commit_session(&mut edit, &ctx.repos, user_id).await);
        assert_eq!(outcome, None);
        assert!(ctx.transactions().change_log_repository.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_commit_delete() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut add = EditSession::begin(
            create_test_payment_method("Visa"),
            ServerAction::Add,
            &TrackerConfig::default(),
        );
        commit_session(&mut add, &ctx.repos, user_id).await?;
        let method = add.into_record();
        let method_id = method.id;

        let mut delete = EditSession::begin(method, ServerAction::Delete, &TrackerConfig::default());
        let outcome = commit_session(&mut delete, &ctx.repos, user_id)
            .await?
            .ok_or("delete should be written")?;
        assert_eq!(outcome.entry_count, 0);

        let exists = ctx.payment_methods().record_repository.exist_by_ids(&[method_id]).await?;
        assert_eq!(exists, vec![(method_id, false)]);

        let log = ctx
            .payment_methods()
            .change_log_repository
            .load_change_log(method_id, PageRequest::default())
            .await?;
        assert_eq!(log.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_payment_method_edit_logs_significant_and_plain_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut add = EditSession::begin(
            create_test_payment_method("Visa"),
            ServerAction::Add,
            &TrackerConfig::default(),
        );
        commit_session(&mut add, &ctx.repos, user_id).await?;

        let mut edit = EditSession::begin(add.into_record(), ServerAction::Edit, &TrackerConfig::default());
        edit.record_mut().is_private = true;
        edit.record_mut().limit = Some(amount("5000"));
        let outcome = commit_session(&mut edit, &ctx.repos, user_id)
            .await?
            .ok_or("edit should be written")?;

        let group = ctx
            .payment_methods()
            .change_log_repository
            .load_change_group(outcome.audit_log_id)
            .await?;
        let fields: Vec<PaymentMethodField> = group.iter().map(|entry| entry.field()).collect();
        assert_eq!(fields, vec![PaymentMethodField::Limit, PaymentMethodField::IsPrivate]);
        assert_eq!(group[0].old_value(), Some("2500.00"));
        assert_eq!(group[0].new_value(), Some("5000.00"));

        Ok(())
    }

    #[tokio::test]
    async fn test_commit_detects_concurrent_edit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut add = begin(create_test_transaction("Coffee", "-4.50"), ServerAction::Add);
        commit_session(&mut add, &ctx.repos, user_id).await?;
        let stored = add.into_record();

        let mut phone = begin(stored.clone(), ServerAction::Edit);
        let mut tablet = begin(stored, ServerAction::Edit);

        phone.record_mut().amount = amount("-5.00");
        commit_session(&mut phone, &ctx.repos, user_id).await?;

        tablet.record_mut().notes = text("with oat milk");
        let result = commit_session(&mut tablet, &ctx.repos, user_id).await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_change_log_untouched() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_id = Uuid::new_v4();

        let mut add = begin(create_test_transaction("Coffee", "-4.50"), ServerAction::Add);
        commit_session(&mut add, &ctx.repos, user_id).await?;
        let stored = add.into_record();
        let record_id = stored.id;

        let mut phone = begin(stored.clone(), ServerAction::Edit);
        let mut tablet = begin(stored, ServerAction::Edit);

        phone.record_mut().amount = amount("-5.00");
        commit_session(&mut phone, &ctx.repos, user_id).await?;
        assert_eq!(phone.record().change_log().len(), 1);
        let audit_logs = ctx.audit_repos().audit_log_repository.len();

        tablet.record_mut().notes = text("with oat milk");
        assert!(commit_session(&mut tablet, &ctx.repos, user_id).await.is_err());
        assert!(commit_session(&mut tablet, &ctx.repos, user_id).await.is_err());

        assert!(tablet.record().change_log().is_empty());
        assert!(tablet.can_save());
        assert_eq!(tablet.changed_fields(), vec![TransactionField::Notes]);
        assert_eq!(ctx.audit_repos().audit_log_repository.len(), audit_logs);

        let log = ctx
            .transactions()
            .change_log_repository
            .load_change_log(record_id, PageRequest::default())
            .await?;
        assert_eq!(log.total, 1);

        Ok(())
    }
}
