pub mod audit;
pub mod auditable;
pub mod finance;
pub mod identifiable;
pub mod snapshot;
pub mod trackable;

// Re-exports
pub use audit::*;
pub use auditable::*;
pub use identifiable::*;
pub use snapshot::*;
pub use trackable::*;
