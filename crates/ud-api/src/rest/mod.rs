pub mod dashboard;
pub mod static_files;
pub mod usage;
