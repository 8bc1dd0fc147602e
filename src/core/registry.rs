//! Project registry
//!
//! The directory-backed store of playgrounds. Every playground lives in
//! `root/<name>/` and carries exactly one metadata record
//! (`root/<name>/.rshed.toml`). All front-ends go through [`Registry`]
//! instead of touching the layout directly.
//!
//! Existence is decided by directory presence alone: `create` refuses an
//! existing directory even if it has no metadata, and `remove` deletes
//! whatever directory is there. `get` distinguishes a missing directory
//! ([`RegistryError::NotFound`]) from a directory without a usable record
//! ([`RegistryError::MissingMetadata`], [`RegistryError::Parse`]).

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::defaults::METADATA_FILE;
use crate::core::project::{self, NewProject, Project};
use crate::core::template;
use crate::error::RegistryError;
use crate::infra::filesystem;
use crate::infra::git::Git;

/// Directory-backed playground store
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
    git: Option<Git>,
    init_vcs: bool,
}

impl Registry {
    /// Open the registry rooted at `root`, using `git` from PATH for VCS init
    ///
    /// Nothing is created on disk until the first playground is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            git: Git::locate().ok(),
            init_vcs: true,
        }
    }

    /// Use a specific git handle (or none) for VCS initialization
    #[must_use]
    pub fn with_git(mut self, git: Option<Git>) -> Self {
        self.git = git;
        self
    }

    /// Skip version-control initialization on `create`
    #[must_use]
    pub fn without_vcs(mut self) -> Self {
        self.init_vcs = false;
        self
    }

    /// Root directory holding one subdirectory per playground
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the playground called `name`
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether a directory for `name` exists (metadata is not checked)
    pub fn exists(&self, name: &str) -> bool {
        project::validate_name(name).is_ok() && self.project_dir(name).is_dir()
    }

    /// Create a playground from `request`
    ///
    /// Unknown templates fall back to the default template; the returned
    /// project's `template` names the one actually used. Version-control
    /// initialization is best effort and never fails the creation.
    pub fn create(&self, request: &NewProject) -> Result<Project, RegistryError> {
        check_name(&request.name)?;

        let dir = self.project_dir(&request.name);
        if dir.exists() {
            return Err(RegistryError::AlreadyExists {
                name: request.name.clone(),
            });
        }

        let template = template::resolve_or_default(&request.template)?;
        if template.name != request.template {
            tracing::warn!(
                "Template '{}' not found, using '{}' for '{}'",
                request.template,
                template.name,
                request.name
            );
        }

        filesystem::create_dir_all(&self.root)?;
        filesystem::create_dir(&dir)?;
        tracing::info!("Creating playground '{}' in {}", request.name, dir.display());

        let mut project = Project::new(&request.name, template.name, request.tags.clone(), Utc::now());
        project.path = Some(dir.clone());
        self.write_metadata(&dir, &project)?;

        for (relative, content) in &template.files {
            filesystem::write_file(&dir.join(relative), content)?;
        }
        tracing::debug!("Wrote {} template files", template.files.len());

        if self.init_vcs {
            self.init_vcs(&dir);
        }

        Ok(project)
    }

    fn init_vcs(&self, dir: &Path) {
        match &self.git {
            Some(git) => {
                if let Err(e) = git.init(dir) {
                    tracing::warn!("Failed to initialize git in {}: {e}", dir.display());
                }
            }
            None => tracing::warn!("git not found, skipping repository initialization"),
        }
    }

    /// Load the playground called `name`
    ///
    /// `path` is always set to `root/name`, never taken from the record.
    pub fn get(&self, name: &str) -> Result<Project, RegistryError> {
        check_name(name)?;

        let dir = self.project_dir(name);
        if !dir.is_dir() {
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            });
        }

        let metadata_path = dir.join(METADATA_FILE);
        if !metadata_path.is_file() {
            return Err(RegistryError::MissingMetadata {
                name: name.to_string(),
                path: dir,
            });
        }

        let bytes = filesystem::read_bytes(&metadata_path)?;
        let parse_error = |error: String| RegistryError::Parse {
            name: name.to_string(),
            error,
        };
        let content = String::from_utf8(bytes).map_err(|e| parse_error(e.to_string()))?;
        let mut project = project::decode(&content).map_err(|e| parse_error(e.to_string()))?;

        if project.name != name {
            return Err(RegistryError::Parse {
                name: name.to_string(),
                error: format!("record is named '{}'", project.name),
            });
        }

        project.path = Some(dir);
        Ok(project)
    }

    /// Overwrite the metadata record of `project`
    ///
    /// Uses `project.path` when set, `root/name` otherwise. The directory is
    /// not created: writing into a missing directory is an I/O error.
    pub fn update(&self, project: &Project) -> Result<(), RegistryError> {
        let dir = match &project.path {
            Some(path) => path.clone(),
            None => {
                check_name(&project.name)?;
                self.project_dir(&project.name)
            }
        };
        self.write_metadata(&dir, project)
    }

    /// Set `lastAccessed` to now and persist it
    pub fn touch(&self, name: &str) -> Result<Project, RegistryError> {
        let mut project = self.get(name)?;
        project.touch(Utc::now());
        self.update(&project)?;
        Ok(project)
    }

    /// Delete the playground directory and everything in it
    ///
    /// Removing a playground that does not exist is not an error.
    pub fn remove(&self, name: &str) -> Result<(), RegistryError> {
        check_name(name)?;
        let dir = self.project_dir(name);
        filesystem::remove_dir_all(&dir)?;
        tracing::info!("Removed playground '{}'", name);
        Ok(())
    }

    /// Load every playground under the root
    ///
    /// Directories that are not valid playgrounds are skipped with a warning.
    /// Order follows directory enumeration and is unspecified.
    pub fn list(&self) -> Result<Vec<Project>, RegistryError> {
        let mut projects = Vec::new();

        for dir in filesystem::list_subdirs(&self.root)? {
            let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("Skipping non UTF-8 directory {}", dir.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            match self.get(name) {
                Ok(project) => projects.push(project),
                Err(e) => tracing::warn!("Skipping '{}': {e}", name),
            }
        }

        Ok(projects)
    }

    /// Copy the playground's files to `destination`, leaving out the metadata record
    ///
    /// Relative structure and permission bits are preserved. A failure part
    /// way through leaves the partial copy in place.
    pub fn copy_to(&self, project: &Project, destination: &Path) -> Result<u64, RegistryError> {
        let src = match &project.path {
            Some(path) => path.clone(),
            None => self.project_dir(&project.name),
        };

        filesystem::create_dir_all(destination)?;
        let copied = filesystem::copy_tree(&src, destination, |relative| {
            relative == Path::new(METADATA_FILE)
        })?;
        tracing::info!(
            "Copied {} files from {} to {}",
            copied,
            src.display(),
            destination.display()
        );
        Ok(copied)
    }

    fn write_metadata(&self, dir: &Path, project: &Project) -> Result<(), RegistryError> {
        let content = project::encode(project).map_err(|e| RegistryError::Encode {
            name: project.name.clone(),
            error: e.to_string(),
        })?;
        filesystem::overwrite_file(&dir.join(METADATA_FILE), &content)?;
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), RegistryError> {
    project::validate_name(name).map_err(|reason| RegistryError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn registry(temp: &TempDir) -> Registry {
        Registry::new(temp.path().join("projects")).without_vcs()
    }

    fn request(name: &str, template: &str) -> NewProject {
        NewProject::new(name, template, vec!["test".to_string()])
    }

    fn files_under(dir: &Path) -> BTreeSet<String> {
        walkdir::WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(dir)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_create_materializes_template() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);

        let project = registry.create(&request("x", "basic")).unwrap();

        assert_eq!(project.template, "basic");
        assert_eq!(project.created, project.last_accessed);
        assert_eq!(project.path, Some(registry.project_dir("x")));

        let mut expected: BTreeSet<String> = template::get("basic")
            .unwrap()
            .files
            .keys()
            .map(|k| k.to_string())
            .collect();
        expected.insert(METADATA_FILE.to_string());
        assert_eq!(files_under(&registry.project_dir("x")), expected);
    }

    #[test]
    fn test_create_then_get() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let created = registry.create(&request("x", "basic")).unwrap();

        let loaded = registry.get("x").unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.path, Some(temp.path().join("projects").join("x")));
    }

    #[test]
    fn test_create_twice_fails_and_keeps_first() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let first = registry.create(&request("dup", "cli")).unwrap();
        let before = files_under(&registry.project_dir("dup"));

        let result = registry.create(&request("dup", "web"));
        match result {
            Err(RegistryError::AlreadyExists { name }) => assert_eq!(name, "dup"),
            other => panic!("Expected AlreadyExists, got: {other:?}"),
        }

        assert_eq!(registry.get("dup").unwrap(), first);
        assert_eq!(files_under(&registry.project_dir("dup")), before);
    }

    #[test]
    fn test_create_over_bare_directory_fails() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        std::fs::create_dir_all(registry.project_dir("taken")).unwrap();

        assert!(matches!(
            registry.create(&request("taken", "basic")),
            Err(RegistryError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_create_unknown_template_falls_back() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);

        let project = registry.create(&request("y", "does-not-exist")).unwrap();

        assert_eq!(project.template, "basic");
        let main = std::fs::read_to_string(registry.project_dir("y").join("src/main.rs")).unwrap();
        assert_eq!(main, template::get("basic").unwrap().files["src/main.rs"]);
    }

    #[test]
    fn test_create_nested_template_files() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("tool", "cli")).unwrap();

        assert!(registry.project_dir("tool").join("src/cli.rs").is_file());
    }

    #[test]
    fn test_create_rejects_invalid_names() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);

        for name in ["", "..", "a/b", ".hidden"] {
            assert!(
                matches!(
                    registry.create(&request(name, "basic")),
                    Err(RegistryError::InvalidName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(!temp.path().join("b").exists());
    }

    #[test]
    fn test_create_with_vcs() {
        let Ok(git) = Git::locate() else {
            return;
        };
        let temp = TempDir::new().unwrap();
        let registry = Registry::new(temp.path()).with_git(Some(git));

        registry.create(&request("tracked", "basic")).unwrap();

        let dir = registry.project_dir("tracked");
        assert!(dir.join(".git").is_dir());
        assert!(dir.join(".gitignore").is_file());
    }

    #[test]
    fn test_create_without_git_binary_still_succeeds() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::new(temp.path()).with_git(Some(Git::with_binary(
            PathBuf::from("/nonexistent/git"),
        )));

        let project = registry.create(&request("nogit", "basic")).unwrap();
        assert_eq!(registry.get("nogit").unwrap(), project);
    }

    #[test]
    fn test_get_missing() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            registry(&temp).get("ghost"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_get_directory_without_metadata() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        std::fs::create_dir_all(registry.project_dir("bare")).unwrap();

        assert!(matches!(
            registry.get("bare"),
            Err(RegistryError::MissingMetadata { .. })
        ));
    }

    #[test]
    fn test_get_corrupt_metadata() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("broken", "basic")).unwrap();
        std::fs::write(
            registry.project_dir("broken").join(METADATA_FILE),
            "not = [valid",
        )
        .unwrap();

        assert!(matches!(
            registry.get("broken"),
            Err(RegistryError::Parse { .. })
        ));
    }

    #[test]
    fn test_get_non_utf8_metadata_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("binary", "basic")).unwrap();
        registry.create(&request("fine", "basic")).unwrap();
        std::fs::write(
            registry.project_dir("binary").join(METADATA_FILE),
            [0xff, 0xfe, 0x00],
        )
        .unwrap();

        match registry.get("binary") {
            Err(RegistryError::Parse { name, .. }) => assert_eq!(name, "binary"),
            other => panic!("Expected Parse, got: {other:?}"),
        }

        let listed: Vec<_> = registry.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(listed, vec!["fine"]);
    }

    #[test]
    fn test_get_ignores_mismatched_record_name() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("original", "basic")).unwrap();
        std::fs::rename(
            registry.project_dir("original"),
            registry.project_dir("renamed"),
        )
        .unwrap();

        assert!(matches!(
            registry.get("renamed"),
            Err(RegistryError::Parse { .. })
        ));
    }

    #[test]
    fn test_update_notes_roundtrip() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("noted", "basic")).unwrap();

        let mut project = registry.get("noted").unwrap();
        let before = project.clone();
        project.notes = "hello".to_string();
        registry.update(&project).unwrap();

        let reloaded = registry.get("noted").unwrap();
        assert_eq!(reloaded.notes, "hello");
        assert_eq!(reloaded.name, before.name);
        assert_eq!(reloaded.created, before.created);
        assert_eq!(reloaded.last_accessed, before.last_accessed);
        assert_eq!(reloaded.template, before.template);
        assert_eq!(reloaded.tags, before.tags);
    }

    #[test]
    fn test_update_derives_path_when_missing() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let mut project = registry.create(&request("derived", "basic")).unwrap();
        project.path = None;
        project.notes = "via name".to_string();

        registry.update(&project).unwrap();
        assert_eq!(registry.get("derived").unwrap().notes, "via name");
    }

    #[test]
    fn test_update_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let project = Project::new("ghost", "basic", vec![], Utc::now());

        assert!(matches!(
            registry.update(&project),
            Err(RegistryError::Io(_))
        ));
        assert!(!registry.project_dir("ghost").exists());
    }

    #[test]
    fn test_touch_advances_last_accessed() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let mut project = registry.create(&request("old", "basic")).unwrap();
        project.last_accessed = project.last_accessed - Duration::days(10);
        registry.update(&project).unwrap();

        let touched = registry.touch("old").unwrap();
        assert!(touched.last_accessed > project.last_accessed);
        assert_eq!(registry.get("old").unwrap().last_accessed, touched.last_accessed);
        assert_eq!(touched.created, project.created);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("y", "basic")).unwrap();

        registry.remove("y").unwrap();
        assert!(!registry.project_dir("y").exists());
        registry.remove("y").unwrap();
    }

    #[test]
    fn test_remove_deletes_dirty_contents() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("dirty", "basic")).unwrap();
        let dir = registry.project_dir("dirty");
        std::fs::create_dir_all(dir.join("target/debug")).unwrap();
        std::fs::write(dir.join("target/debug/out"), "bin").unwrap();

        registry.remove("dirty").unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_list_skips_invalid_entries() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("a", "basic")).unwrap();
        registry.create(&request("b", "web")).unwrap();
        registry.create(&request("c", "lib")).unwrap();
        std::fs::write(registry.project_dir("c").join(METADATA_FILE), "{{{").unwrap();
        std::fs::create_dir_all(registry.project_dir("no-metadata")).unwrap();
        std::fs::write(registry.root().join("stray.txt"), "x").unwrap();

        let mut names: Vec<_> = registry.list().unwrap().into_iter().map(|p| p.name).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(registry(&temp).list().unwrap().is_empty());
    }

    #[test]
    fn test_list_sets_paths() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        registry.create(&request("p", "basic")).unwrap();

        let projects = registry.list().unwrap();
        assert_eq!(projects[0].path, Some(registry.project_dir("p")));
    }

    #[test]
    fn test_copy_to_excludes_metadata() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let project = registry.create(&request("promoted", "cli")).unwrap();
        let dest = temp.path().join("out");

        registry.copy_to(&project, &dest).unwrap();

        let mut expected = files_under(&registry.project_dir("promoted"));
        expected.remove(METADATA_FILE);
        assert_eq!(files_under(&dest), expected);
        for file in &expected {
            assert_eq!(
                std::fs::read(registry.project_dir("promoted").join(file)).unwrap(),
                std::fs::read(dest.join(file)).unwrap()
            );
        }
    }

    #[test]
    fn test_created_timestamp_survives_update() {
        let temp = TempDir::new().unwrap();
        let registry = registry(&temp);
        let mut project = registry.create(&request("dated", "basic")).unwrap();
        let fixed = Utc.with_ymd_and_hms(2023, 5, 6, 7, 8, 9).unwrap();
        project.created = fixed;
        registry.update(&project).unwrap();

        assert_eq!(registry.get("dated").unwrap().created, fixed);
    }
}
