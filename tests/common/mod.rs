//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests. Every
//! [`TestEnv`] gets its own config and data directories, passed to the
//! binary through the `RSHED_CONFIG_DIR` / `RSHED_DATA_DIR` overrides.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use chrono::{DateTime, Utc};
use rshed::core::project::{NewProject, Project};
use rshed::core::registry::Registry;
use tempfile::TempDir;

/// Isolated rshed environment
pub struct TestEnv {
    /// Temporary directory holding config, data and a scratch working dir
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a fresh environment
    pub fn new() -> Self {
        let env = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        std::fs::create_dir_all(env.work_dir()).expect("Failed to create work directory");
        env
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Default projects root
    pub fn projects_dir(&self) -> PathBuf {
        self.data_dir().join("projects")
    }

    /// Working directory the binary runs in
    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Build a command for the rshed binary
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rshed"));
        cmd.current_dir(self.work_dir())
            .env("RSHED_CONFIG_DIR", self.config_dir())
            .env("RSHED_DATA_DIR", self.data_dir())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG")
            .env_remove("EDITOR");
        cmd
    }

    /// Run rshed with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute rshed")
    }

    /// Run rshed with `args`, assert success and return stdout
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "rshed {:?} failed:\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Registry over the default projects root, without git
    pub fn registry(&self) -> Registry {
        Registry::new(self.projects_dir()).without_vcs()
    }

    /// Create a playground directly through the library
    pub fn seed(&self, name: &str, tags: &[&str]) -> Project {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        self.registry()
            .create(&NewProject::new(name, "basic", tags))
            .expect("Failed to seed playground")
    }

    /// Overwrite a playground's `lastAccessed`
    pub fn set_last_accessed(&self, name: &str, at: DateTime<Utc>) {
        let registry = self.registry();
        let mut project = registry.get(name).expect("Failed to load playground");
        project.last_accessed = at;
        registry.update(&project).expect("Failed to update playground");
    }

    /// Write the global config file
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        std::fs::write(self.config_dir().join("config.toml"), content)
            .expect("Failed to write config");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
