//! Platform-specific directory management
//!
//! Provides platform-specific paths for the config and data directories.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `RSHED_CONFIG_DIR` - Override config directory
//! - `RSHED_DATA_DIR` - Override data directory (projects and workspaces)

use std::env;
use std::path::PathBuf;

use crate::config::defaults::{CONFIG_FILE, PROJECTS_SUBDIR, WORKSPACES_SUBDIR};

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "RSHED_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "RSHED_DATA_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "rshed";

/// Platform-specific directory provider for rshed
#[derive(Debug, Clone)]
pub struct ShedDirs {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl ShedDirs {
    /// Create a new `ShedDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Create an instance rooted at explicit directories
    #[must_use]
    pub fn with_paths(config_dir: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            config_dir,
            data_dir,
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/rshed` or `~/.config/rshed`
    /// - macOS: `~/Library/Application Support/rshed`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the data directory path
    ///
    /// - Linux: `$XDG_DATA_HOME/rshed` or `~/.local/share/rshed`
    /// - macOS: `~/Library/Application Support/rshed`
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Default projects root, used when no workspace is selected
    #[must_use]
    pub fn projects_dir(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_SUBDIR)
    }

    /// Directory holding one subdirectory per named workspace
    #[must_use]
    pub fn workspaces_dir(&self) -> PathBuf {
        self.data_dir.join(WORKSPACES_SUBDIR)
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    fn resolve_data_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_DATA_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_data_dir()
    }

    /// Get platform-specific config directory
    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    /// Get platform-specific data directory
    fn platform_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                    })
            })
    }
}

impl Default for ShedDirs {
    fn default() -> Self {
        Self::new()
    }
}
