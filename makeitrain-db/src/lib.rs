pub mod config;
pub mod models;
pub mod repository;
pub mod tracker;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::TrackerConfig;
pub use models::*;
pub use tracker::*;
