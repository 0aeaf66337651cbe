use std::path::PathBuf;

/// Holds a configurable base directory for all daemon file paths.
///
/// Use `ConfigPaths::new()` for production (resolves `~/.usagedash`),
/// or `ConfigPaths::with_base()` for testing with an isolated directory.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base: PathBuf,
}

impl ConfigPaths {
    /// Create paths rooted at `~/.usagedash`. Returns an error if the home
    /// directory cannot be determined.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            base: home_dir()?.join(".usagedash"),
        })
    }

    /// Create paths rooted at a custom base directory (useful for tests).
    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn config_path(&self) -> PathBuf {
        self.base.join("config.toml")
    }
}

pub(crate) fn home_dir() -> anyhow::Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Workspace directory the report generator writes into.
pub fn default_workspace_dir() -> PathBuf {
    home_dir()
        .map(|home| home.join(".openclaw").join("workspace"))
        .unwrap_or_else(|_| PathBuf::from(".openclaw/workspace"))
}
