//! Workspace management
//!
//! A workspace is an alternate projects root under
//! `<data>/workspaces/<name>`. The selected workspace is persisted in the
//! global configuration; the reserved name `default` selects the standard
//! projects root.

use std::path::PathBuf;

use crate::core::global_config::GlobalConfig;
use crate::core::project::validate_name;
use crate::error::WorkspaceError;
use crate::infra::dirs::ShedDirs;
use crate::infra::filesystem;

/// Name that selects the standard projects root
pub const DEFAULT_WORKSPACE: &str = "default";

/// A workspace as shown by `workspace list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEntry {
    /// Workspace name
    pub name: String,
    /// Whether it is the selected one
    pub current: bool,
}

/// Projects root for the given workspace selection
pub fn projects_root(dirs: &ShedDirs, workspace: Option<&str>) -> PathBuf {
    match workspace {
        None | Some(DEFAULT_WORKSPACE) => dirs.projects_dir(),
        Some(name) => dirs.workspaces_dir().join(name),
    }
}

fn check_name(name: &str) -> Result<(), WorkspaceError> {
    if name == DEFAULT_WORKSPACE || validate_name(name).is_err() {
        return Err(WorkspaceError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Create the workspace directory (no-op if it exists)
pub fn create(dirs: &ShedDirs, name: &str) -> Result<PathBuf, WorkspaceError> {
    check_name(name)?;
    let path = dirs.workspaces_dir().join(name);
    filesystem::create_dir_all(&path)?;
    tracing::info!("Created workspace '{}' at {}", name, path.display());
    Ok(path)
}

/// All workspaces, sorted by name, with the current one marked
pub fn list(dirs: &ShedDirs, config: &GlobalConfig) -> Result<Vec<WorkspaceEntry>, WorkspaceError> {
    let current = config.workspace.as_deref();
    let mut entries: Vec<WorkspaceEntry> = filesystem::list_subdirs(&dirs.workspaces_dir())?
        .into_iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .map(|name| WorkspaceEntry {
            current: current == Some(name.as_str()),
            name,
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Select `name` as the current workspace in `config`
///
/// The workspace must already exist. The caller persists `config`.
pub fn switch(dirs: &ShedDirs, config: &mut GlobalConfig, name: &str) -> Result<(), WorkspaceError> {
    if name == DEFAULT_WORKSPACE {
        config.workspace = None;
        return Ok(());
    }
    check_name(name)?;

    if !dirs.workspaces_dir().join(name).is_dir() {
        return Err(WorkspaceError::NotFound {
            name: name.to_string(),
        });
    }
    config.workspace = Some(name.to_string());
    Ok(())
}
