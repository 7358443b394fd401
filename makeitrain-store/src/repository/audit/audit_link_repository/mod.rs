pub mod create;
pub mod find_by_audit_log_id;
pub mod repo_impl;

pub use repo_impl::AuditLinkRepositoryImpl;
