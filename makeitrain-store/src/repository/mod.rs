pub mod audit;
pub mod change_log_repository;
pub mod pending_repository;
pub mod record_repository;

pub use change_log_repository::ChangeLogRepositoryImpl;
pub use pending_repository::PendingRepositoryImpl;
pub use record_repository::{RecordRepositoryImpl, StoredRecord};
