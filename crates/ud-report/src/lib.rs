pub mod error;
pub mod parser;
pub mod read;
pub mod record;

pub use error::ReportError;
pub use parser::parse_report;
pub use read::{load_report, read_asset, read_report};
pub use record::{AgentUsageRecord, UsageReport, DEFAULT_STATUS};
