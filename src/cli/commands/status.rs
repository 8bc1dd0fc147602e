//! CLI implementation for `rshed status` command
//!
//! Shows one playground's metadata together with its git state. The
//! rendering here is shared with `rshed list`.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::output::is_json;
use crate::core::project::Project;
use crate::core::settings::Settings;
use crate::infra::git::VcsStatus;

/// JSON view of a playground with its derived fields
#[derive(Debug, Serialize)]
pub(crate) struct ProjectReport<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub path: String,
    pub vcs: VcsStatus,
}

impl<'a> ProjectReport<'a> {
    pub(crate) fn new(project: &'a Project, vcs: VcsStatus) -> Self {
        let path = project
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self { project, path, vcs }
    }
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One-line summary of the git state
pub(crate) fn vcs_summary(status: &VcsStatus) -> String {
    if !status.initialized {
        return "not a git repository".dimmed().to_string();
    }

    let state = if status.clean {
        "clean".green()
    } else {
        "modified".yellow()
    };
    let branch = if status.branch.is_empty() {
        "(no branch)"
    } else {
        status.branch.as_str()
    };
    match &status.remote {
        Some(remote) => format!("{branch} {state} -> {remote}"),
        None => format!("{branch} {state}"),
    }
}

/// Print a playground block as used by `list` and `status`
pub(crate) fn print_project(report: &ProjectReport<'_>, show_tags: bool) {
    let project = report.project;
    println!(
        "{} {}",
        project.name.bold(),
        format!("[{}]", project.template).dimmed()
    );
    println!(
        "  Created:  {}   Accessed: {}",
        project.created.format(TIME_FORMAT),
        project.last_accessed.format(TIME_FORMAT)
    );
    println!("  Git:      {}", vcs_summary(&report.vcs));
    if show_tags && !project.tags.is_empty() {
        println!("  Tags:     {}", project.tags.join(", ").cyan());
    }
    if !project.notes.is_empty() {
        println!("  Notes:    {}", project.notes);
    }
}

/// Execute the status command
pub async fn execute(settings: &Settings, name: &str) -> Result<()> {
    let project = settings
        .registry()
        .get(name)
        .with_context(|| format!("Failed to load playground '{name}'"))?;
    let vcs = project
        .path
        .as_deref()
        .map(|path| settings.probe().probe(path))
        .unwrap_or_default();
    let report = ProjectReport::new(&project, vcs);

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_project(&report, true);
    println!("  Path:     {}", report.path);
    Ok(())
}
