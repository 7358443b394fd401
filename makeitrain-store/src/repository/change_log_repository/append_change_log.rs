use async_trait::async_trait;
use makeitrain_api::ApiError;
use makeitrain_db::models::audit::change_log::ChangeLogEntry;
use makeitrain_db::models::identifiable::Identifiable;
use makeitrain_db::models::trackable::TrackedField;
use makeitrain_db::repository::append_change_log::AppendChangeLog;
use std::collections::HashSet;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ChangeLogRepositoryImpl;

impl<F: TrackedField> ChangeLogRepositoryImpl<F> {
    pub(super) async fn append_change_log_impl(
        repo: &ChangeLogRepositoryImpl<F>,
        entries: Vec<ChangeLogEntry<F>>,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut stored = repo.entries.write();
        let known: HashSet<_> = stored.iter().map(Identifiable::get_id).collect();
        if let Some(duplicate) = entries.iter().find(|entry| known.contains(&entry.get_id())) {
            return Err(ApiError::ValidationError(format!(
                "change log entry {} already stored",
                duplicate.get_id()
            ))
            .into());
        }

        let appended = entries.len();
        stored.extend(entries);
        debug!(appended, total = stored.len(), "Change log entries appended");

        Ok(appended)
    }
}

#[async_trait]
impl<F: TrackedField> AppendChangeLog<F> for ChangeLogRepositoryImpl<F> {
    async fn append_change_log(&self, entries: Vec<ChangeLogEntry<F>>) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::append_change_log_impl(self, entries).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use makeitrain_db::models::audit::change_log::ChangeLogEntry;
    use makeitrain_db::models::finance::transaction::TransactionField;
    use makeitrain_db::repository::append_change_log::AppendChangeLog;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_change_log() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let change_log_repo = &ctx.transactions().change_log_repository;

        let item_id = Uuid::new_v4();
        let group_id = Uuid::new_v4();
        let entry = ChangeLogEntry::new(
            item_id,
            TransactionField::Title,
            Some("Coffee".to_string()),
            Some("Coffee Shop".to_string()),
            group_id,
        );

        let appended = change_log_repo.append_change_log(vec![entry.clone()]).await?;
        assert_eq!(appended, 1);
        assert_eq!(change_log_repo.append_change_log(Vec::new()).await?, 0);

        // The same entry cannot be stored twice
        assert!(change_log_repo.append_change_log(vec![entry]).await.is_err());
        assert_eq!(change_log_repo.len(), 1);

        Ok(())
    }
}
