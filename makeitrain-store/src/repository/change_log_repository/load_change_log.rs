use async_trait::async_trait;
use makeitrain_db::models::audit::change_log::ChangeLogEntry;
use makeitrain_db::models::trackable::TrackedField;
use makeitrain_db::repository::load_change_log::LoadChangeLog;
use makeitrain_db::repository::pagination::{Page, PageRequest};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ChangeLogRepositoryImpl;

impl<F: TrackedField> ChangeLogRepositoryImpl<F> {
    pub(super) async fn load_change_log_impl(
        repo: &ChangeLogRepositoryImpl<F>,
        item_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ChangeLogEntry<F>>, Box<dyn Error + Send + Sync>> {
        let entries = repo.entries.read();
        let for_item: Vec<ChangeLogEntry<F>> = entries
            .iter()
            .filter(|entry| entry.item_id() == item_id)
            .cloned()
            .collect();
        Ok(Page::from_all(for_item, page))
    }

    pub(super) async fn load_change_group_impl(
        repo: &ChangeLogRepositoryImpl<F>,
        group_id: Uuid,
    ) -> Result<Vec<ChangeLogEntry<F>>, Box<dyn Error + Send + Sync>> {
        let entries = repo.entries.read();
        Ok(entries
            .iter()
            .filter(|entry| entry.group_id() == group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<F: TrackedField> LoadChangeLog<F> for ChangeLogRepositoryImpl<F> {
    async fn load_change_log(
        &self,
        item_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ChangeLogEntry<F>>, Box<dyn Error + Send + Sync>> {
        Self::load_change_log_impl(self, item_id, page).await
    }

    async fn load_change_group(&self, group_id: Uuid) -> Result<Vec<ChangeLogEntry<F>>, Box<dyn Error + Send + Sync>> {
        Self::load_change_group_impl(self, group_id).await
    }
}
