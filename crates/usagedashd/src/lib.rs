//! Shared helpers used by the `usagedashd` binary.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use ud_config::DashboardConfig;
use ud_report::UsageReport;

/// Build-time daemon version string.
///
/// When `USAGEDASHD_VERSION` is provided in the build environment, that value
/// is used. Otherwise we fall back to the crate package version.
pub const DAEMON_VERSION: &str = match option_env!("USAGEDASHD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub report_path: Option<PathBuf>,
    pub dashboard_path: Option<PathBuf>,
}

/// Load the config file (explicit or default location) and apply overrides.
pub fn resolve_config(overrides: &ConfigOverrides) -> anyhow::Result<DashboardConfig> {
    let config = match &overrides.config_file {
        Some(file) => {
            if !file.exists() {
                anyhow::bail!("config file not found: {}", file.display());
            }
            DashboardConfig::load_file(file)?
        }
        None => DashboardConfig::load()?,
    };
    apply_overrides(config, overrides)
}

/// Apply CLI overrides on top of `config` and re-validate.
pub fn apply_overrides(
    mut config: DashboardConfig,
    overrides: &ConfigOverrides,
) -> anyhow::Result<DashboardConfig> {
    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(path) = &overrides.report_path {
        config.report_path = path.clone();
    }
    if let Some(path) = &overrides.dashboard_path {
        config.dashboard_path = path.clone();
    }
    config.validate()?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Console output
// ---------------------------------------------------------------------------

/// Lines printed when the server starts.
pub fn startup_banner(config: &DashboardConfig) -> String {
    let base = config.local_url();
    let mut out = String::new();
    out.push_str("Model usage dashboard running...\n\n");
    out.push_str(&format!("  Server:    {}\n", base));
    out.push_str(&format!("  Dashboard: {}/dashboard\n", base));
    out.push_str(&format!("  API:       {}/api/model-usage\n\n", base));
    out.push_str(&format!("  Report:    {}\n", display_path(&config.report_path)));
    out.push_str(&format!("  HTML:      {}\n", display_path(&config.dashboard_path)));
    out
}

fn display_path(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (missing)", path.display())
    }
}

/// One-line summary of a usage envelope fetched from a running server.
pub fn format_status(report: &UsageReport) -> String {
    let tokens: u64 = report
        .agents
        .iter()
        .map(|a| a.input_tokens.saturating_add(a.output_tokens))
        .fold(0, u64::saturating_add);
    let cost: f64 = report.agents.iter().map(|a| a.cost).sum();
    format!(
        "{} agents, {} tokens, ${:.2} (generated {})",
        report.total_agents, tokens, cost, report.timestamp
    )
}

// ---------------------------------------------------------------------------
// Shutdown
// ---------------------------------------------------------------------------

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    tracing::error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        tokio::select! {
            _ = ctrl_c => {}
            _ = terminate => {}
        }
    }
    #[cfg(not(unix))]
    ctrl_c.await;

    tracing::info!("Shutting down...");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
