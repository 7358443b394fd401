pub mod append_change_log;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod load;
pub mod load_batch;
pub mod load_change_log;
pub mod pagination;
pub mod update_batch;

// Re-exports
pub use append_change_log::*;
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use load::*;
pub use load_batch::*;
pub use load_change_log::*;
pub use pagination::*;
pub use update_batch::*;
