//! Git operations
//!
//! Read-only status probing and best-effort repository initialization,
//! both driven through the `git` binary found on PATH.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::GITIGNORE_ENTRIES;
use crate::error::{FilesystemError, ToolError};
use crate::infra::{filesystem, process};

/// Name of the version-control metadata directory
const GIT_DIR: &str = ".git";

/// Version-control state of a directory
///
/// Recomputed on every probe and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VcsStatus {
    /// A `.git` directory is present
    pub initialized: bool,
    /// Working tree has no pending changes
    pub clean: bool,
    /// Current branch name (empty if unknown)
    pub branch: String,
    /// `origin` remote URL, if configured
    pub remote: Option<String>,
}

/// Handle to the git binary
#[derive(Debug, Clone)]
pub struct Git {
    binary: PathBuf,
}

impl Git {
    /// Find `git` on PATH
    pub fn locate() -> Result<Self, ToolError> {
        Ok(Self {
            binary: process::locate("git")?,
        })
    }

    /// Use an explicit git binary
    pub fn with_binary(binary: PathBuf) -> Self {
        Self { binary }
    }

    fn run(&self, repo: &Path, args: &[&str]) -> Result<String, ToolError> {
        process::capture(&self.binary, args, repo)
    }

    /// Initialize a repository in `path` and write a `.gitignore`
    pub fn init(&self, path: &Path) -> Result<(), InitVcsError> {
        self.run(path, &["init", "--quiet"])?;

        let mut content = String::from("# rshed\n");
        for entry in GITIGNORE_ENTRIES {
            content.push_str(entry);
            content.push('\n');
        }
        filesystem::write_file(&path.join(".gitignore"), &content)?;
        Ok(())
    }
}

/// Failure while initializing version control for a new playground
#[derive(thiserror::Error, Debug)]
pub enum InitVcsError {
    /// git binary missing or `git init` failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// `.gitignore` could not be written
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Read-only inspector of a directory's version-control state
#[derive(Debug, Clone, Default)]
pub struct VcsProbe {
    git: Option<Git>,
}

impl VcsProbe {
    /// Create a probe; without a git binary every sub-query stays at its default
    pub fn new(git: Option<Git>) -> Self {
        Self { git }
    }

    /// Create a probe using `git` from PATH, if any
    pub fn from_path() -> Self {
        Self::new(Git::locate().ok())
    }

    /// Inspect `path`
    ///
    /// Never fails: a directory without `.git` reports `initialized: false`,
    /// and each of branch, cleanliness and remote falls back to its default
    /// independently when its query fails.
    pub fn probe(&self, path: &Path) -> VcsStatus {
        let mut status = VcsStatus::default();
        if !path.join(GIT_DIR).exists() {
            return status;
        }
        status.initialized = true;

        let Some(git) = &self.git else {
            tracing::debug!("git not available, reporting bare status for {}", path.display());
            return status;
        };

        match git.run(path, &["branch", "--show-current"]) {
            Ok(out) => status.branch = out.trim().to_string(),
            Err(e) => tracing::debug!("branch query failed for {}: {e}", path.display()),
        }

        match git.run(path, &["status", "--porcelain"]) {
            Ok(out) => status.clean = out.trim().is_empty(),
            Err(e) => tracing::debug!("status query failed for {}: {e}", path.display()),
        }

        match git.run(path, &["config", "--get", "remote.origin.url"]) {
            Ok(out) if !out.trim().is_empty() => status.remote = Some(out.trim().to_string()),
            Ok(_) => {}
            Err(e) => tracing::debug!("remote query failed for {}: {e}", path.display()),
        }

        status
    }
}
