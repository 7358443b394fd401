//! Fresh, isolated in-memory repositories for each test

use crate::memory_repositories::{MemoryRepositories, RecordStore, StoreRepositories};
use makeitrain_db::models::audit::AuditLogModel;
use makeitrain_db::models::finance::payment_method::PaymentMethodModel;
use makeitrain_db::models::finance::transaction::TransactionModel;
use uuid::Uuid;

use crate::repository::audit::AuditRepositories;

/// Test context owning one set of repositories.
///
/// Nothing is shared between contexts, so tests never see each other's data.
pub struct TestContext {
    pub repos: StoreRepositories,
}

impl TestContext {
    pub fn audit_repos(&self) -> &AuditRepositories {
        &self.repos.audit
    }

    pub fn transactions(&self) -> &RecordStore<TransactionModel> {
        &self.repos.transactions
    }

    pub fn payment_methods(&self) -> &RecordStore<PaymentMethodModel> {
        &self.repos.payment_methods
    }
}

/// Setup a test context with empty repositories
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let audit_log_repo = &ctx.audit_repos().audit_log_repository;
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = MemoryRepositories::default().create_all_repositories();
    Ok(TestContext { repos })
}

pub fn create_test_audit_log() -> AuditLogModel {
    AuditLogModel::new(Uuid::new_v4())
}
