use std::sync::Arc;

use super::{audit_link_repository::AuditLinkRepositoryImpl, audit_log_repository::AuditLogRepositoryImpl};

/// Factory for the audit module repositories
#[derive(Default)]
pub struct AuditRepoFactory {}

impl AuditRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    pub fn build_audit_log_repo(&self) -> Arc<AuditLogRepositoryImpl> {
        Arc::new(AuditLogRepositoryImpl::new())
    }

    pub fn build_audit_link_repo(&self) -> Arc<AuditLinkRepositoryImpl> {
        Arc::new(AuditLinkRepositoryImpl::new())
    }

    pub fn build_all_repos(&self) -> AuditRepositories {
        AuditRepositories {
            audit_log_repository: self.build_audit_log_repo(),
            audit_link_repository: self.build_audit_link_repo(),
        }
    }
}

/// Container for all audit module repositories
pub struct AuditRepositories {
    pub audit_log_repository: Arc<AuditLogRepositoryImpl>,
    pub audit_link_repository: Arc<AuditLinkRepositoryImpl>,
}
