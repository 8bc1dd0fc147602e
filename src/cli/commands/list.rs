//! CLI implementation for `rshed list` command

use anyhow::{Context, Result};

use super::status::{print_project, ProjectReport};
use crate::cli::output::{is_json, print_detail, print_info};
use crate::core::listing::ListOptions;
use crate::core::settings::Settings;

/// Execute the list command
pub async fn execute(settings: &Settings, options: &ListOptions, show_tags: bool) -> Result<()> {
    let registry = settings.registry();
    let projects = registry
        .list()
        .with_context(|| format!("Failed to list playgrounds in {}", registry.root().display()))?;
    let projects = options.apply(projects);

    let probe = settings.probe();
    let statuses: Vec<_> = projects
        .iter()
        .map(|p| p.path.as_deref().map(|path| probe.probe(path)).unwrap_or_default())
        .collect();
    let reports: Vec<ProjectReport<'_>> = projects
        .iter()
        .zip(statuses)
        .map(|(project, vcs)| ProjectReport::new(project, vcs))
        .collect();

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        print_info("No playgrounds found");
        print_detail("Create one with 'rshed create -n NAME' or 'rshed interactive'");
        return Ok(());
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_project(report, show_tags);
    }
    Ok(())
}
