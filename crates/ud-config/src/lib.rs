pub mod dashboard;
pub mod paths;

pub use dashboard::{DashboardConfig, DEFAULT_MAX_FILE_BYTES};
pub use paths::ConfigPaths;
