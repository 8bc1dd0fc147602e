//! CLI implementation for `rshed create` command

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, is_json, print_detail, print_success, print_warning};
use crate::core::project::{split_tags, NewProject};
use crate::core::settings::Settings;

/// Execute the create command
pub async fn execute(settings: &Settings, name: &str, template: &str, tags: Option<&str>) -> Result<()> {
    let request = NewProject::new(name, template, tags.map(split_tags).unwrap_or_default());
    let registry = settings.registry();

    let spinner = create_spinner(&format!("Creating playground '{name}'..."));
    let result = tokio::task::spawn_blocking(move || registry.create(&request))
        .await
        .context("Creation task panicked")?;
    spinner.finish_and_clear();

    let project = result.with_context(|| format!("Failed to create playground '{name}'"))?;

    if project.template != template {
        print_warning(&format!(
            "Template '{template}' not found, used '{}' instead",
            project.template
        ));
    }

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    print_success(&format!("Created playground '{}'", project.name));
    if let Some(path) = &project.path {
        print_detail(&format!("Path: {}", path.display()));
    }
    print_detail(&format!("Template: {}", project.template));
    if !project.tags.is_empty() {
        print_detail(&format!("Tags: {}", project.tags.join(", ")));
    }
    Ok(())
}
