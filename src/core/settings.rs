//! Resolved runtime settings
//!
//! Combines the platform directories with the persisted [`GlobalConfig`]
//! into one explicit object. Registries and probes are built from it rather
//! than from process-wide state, so switching workspace is just building a
//! registry over a different root.

use std::path::PathBuf;

use crate::core::global_config::{GlobalConfig, GlobalConfigError};
use crate::core::registry::Registry;
use crate::core::workspace;
use crate::infra::dirs::ShedDirs;
use crate::infra::git::VcsProbe;

/// Directories plus configuration for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Platform directories
    pub dirs: ShedDirs,
    /// Persisted configuration
    pub config: GlobalConfig,
}

impl Settings {
    /// Load the configuration record from `dirs`
    pub fn load(dirs: ShedDirs) -> Result<Self, GlobalConfigError> {
        let config = GlobalConfig::load(&dirs)?;
        Ok(Self { dirs, config })
    }

    /// Projects root of the selected workspace
    pub fn projects_root(&self) -> PathBuf {
        workspace::projects_root(&self.dirs, self.config.workspace.as_deref())
    }

    /// Registry over the selected workspace
    pub fn registry(&self) -> Registry {
        Registry::new(self.projects_root())
    }

    /// Version-control probe using `git` from PATH
    pub fn probe(&self) -> VcsProbe {
        VcsProbe::from_path()
    }

    /// Persist the configuration record
    pub fn save(&self) -> Result<(), GlobalConfigError> {
        self.config.save(&self.dirs)
    }
}
