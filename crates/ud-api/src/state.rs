use std::sync::Arc;
use ud_config::DashboardConfig;

/// Shared handler state. Nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
