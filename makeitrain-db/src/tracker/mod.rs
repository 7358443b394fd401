pub mod compare;
pub mod diff;
pub mod render;
pub mod session;
pub mod shadow_copy;
pub mod shadow_copy_tracker;
pub mod undo;

pub use compare::*;
pub use diff::*;
pub use render::*;
pub use session::*;
pub use shadow_copy::*;
pub use shadow_copy_tracker::*;
pub use undo::*;
