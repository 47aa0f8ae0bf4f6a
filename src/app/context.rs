use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LauncherConfig;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub cfg: LauncherConfig,
    pub verbosity: u8,
}

impl AppContext {
    pub fn new(project_root: PathBuf, cfg: LauncherConfig, verbosity: u8) -> Self {
        Self {
            project_root,
            cfg,
            verbosity,
        }
    }

    /// Absolute path of the append-only timing log.
    #[must_use]
    pub fn timing_log(&self) -> PathBuf {
        self.project_root.join(&self.cfg.timing_log)
    }

    /// Convenience constructor capturing the project root from the current
    /// directory at startup.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd(verbosity: u8) -> Result<Self> {
        let root = std::env::current_dir().context("failed to determine project root")?;
        let cfg = LauncherConfig::load();
        Ok(Self::new(root, cfg, verbosity))
    }
}
