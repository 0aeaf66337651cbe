use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use crate::paths::{default_workspace_dir, ConfigPaths};

/// Default max size for the report and dashboard files: 10 MB
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn path_from_env(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_report_path() -> PathBuf {
    path_from_env("USAGEDASH_REPORT_PATH")
        .unwrap_or_else(|| default_workspace_dir().join("MODEL_USAGE_DASHBOARD.md"))
}

fn default_dashboard_path() -> PathBuf {
    path_from_env("USAGEDASH_DASHBOARD_PATH")
        .unwrap_or_else(|| default_workspace_dir().join("web").join("dashboard.html"))
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Markdown report holding the agent usage table.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
    /// HTML page served at `/` and `/dashboard`.
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: PathBuf,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            report_path: default_report_path(),
            dashboard_path: default_dashboard_path(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

impl DashboardConfig {
    /// Load config from the default location (`~/.usagedash/config.toml`).
    pub fn load() -> anyhow::Result<Self> {
        let paths = ConfigPaths::new()?;
        Self::load_from(&paths)
    }

    /// Load config from a specific `ConfigPaths`.
    pub fn load_from(paths: &ConfigPaths) -> anyhow::Result<Self> {
        Self::load_file(&paths.config_path())
    }

    /// Load config from an explicit file. A missing file yields the defaults.
    pub fn load_file(config_file: &Path) -> anyhow::Result<Self> {
        let config: DashboardConfig = if config_file.exists() {
            let content = std::fs::read_to_string(config_file)?;
            toml::from_str(&content).map_err(|e| {
                anyhow::anyhow!("invalid config {}: {}", config_file.display(), e)
            })?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values. Called automatically by the `load*` functions.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must not be 0");
        }
        if self.report_path.as_os_str().is_empty() {
            anyhow::bail!("report_path must not be empty");
        }
        if self.dashboard_path.as_os_str().is_empty() {
            anyhow::bail!("dashboard_path must not be empty");
        }
        if self.max_file_bytes == 0 {
            anyhow::bail!("max_file_bytes must be greater than 0");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address clients should use to reach this server.
    pub fn local_url(&self) -> String {
        let host = if self.host.is_unspecified() {
            "localhost".to_string()
        } else {
            self.host.to_string()
        };
        format!("http://{}:{}", host, self.port)
    }
}
