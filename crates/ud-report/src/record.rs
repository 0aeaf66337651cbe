use serde::{Deserialize, Serialize};

/// Status reported when the table has no status column.
pub const DEFAULT_STATUS: &str = "Available";

/// One agent row from the usage report table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentUsageRecord {
    pub name: String,
    pub model: String,
    /// Copied from the report as-is; never parsed into a date.
    pub timestamp: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost: f64,
    pub status: String,
}

/// Response envelope for `/api/model-usage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    pub agents: Vec<AgentUsageRecord>,
    pub timestamp: String,
    pub total_agents: usize,
}

impl UsageReport {
    /// Wrap `agents` and stamp the envelope with the current local time.
    pub fn new(agents: Vec<AgentUsageRecord>) -> Self {
        Self::with_timestamp(agents, chrono::Local::now().to_rfc3339())
    }

    pub fn with_timestamp(agents: Vec<AgentUsageRecord>, timestamp: String) -> Self {
        let total_agents = agents.len();
        Self {
            agents,
            timestamp,
            total_agents,
        }
    }
}
