//! CLI implementation for `rshed deps` command

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, is_json, print_info};
use crate::core::deps::direct_dependencies;
use crate::core::settings::Settings;

/// Execute the deps command
pub async fn execute(settings: &Settings, name: &str) -> Result<()> {
    let project = settings
        .registry()
        .get(name)
        .with_context(|| format!("Failed to load playground '{name}'"))?;
    let path = project
        .path
        .unwrap_or_else(|| settings.projects_root().join(name));

    let spinner = create_spinner("Resolving dependencies...");
    let result = tokio::task::spawn_blocking(move || direct_dependencies(&path))
        .await
        .context("Dependency task panicked")?;
    spinner.finish_and_clear();
    let deps = result.with_context(|| format!("Failed to list dependencies of '{name}'"))?;

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&deps)?);
        return Ok(());
    }

    if deps.is_empty() {
        print_info(&format!("'{name}' has no dependencies"));
        return Ok(());
    }

    println!("Dependencies of '{name}':");
    for dep in &deps {
        println!("  {} v{}", dep.name, dep.version);
    }
    Ok(())
}
