pub mod append_change_log;
pub mod load_change_log;
pub mod repo_impl;

pub use repo_impl::ChangeLogRepositoryImpl;
