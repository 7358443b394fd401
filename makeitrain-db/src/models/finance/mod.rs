pub mod color;
pub mod common_enums;
pub mod location;
pub mod payment_method;
pub mod references;
pub mod transaction;
