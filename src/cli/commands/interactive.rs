//! CLI command for `rshed interactive`
//!
//! Launches the interactive playground creator.

use std::io::IsTerminal;

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_info, print_success};
use crate::cli::tui::ProjectCreator;
use crate::core::settings::Settings;

/// Execute the interactive command
pub async fn execute(settings: Settings) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal. Use 'rshed create -n NAME' instead."
        );
    }

    let registry = settings.registry();
    let runtime = tokio::runtime::Handle::current();
    let created = tokio::task::spawn_blocking(move || ProjectCreator::new(registry, runtime).run())
        .await
        .context("Interactive session panicked")??;

    match created {
        Some(project) => {
            print_success(&format!("Created playground '{}'", project.name));
            if let Some(path) = &project.path {
                print_detail(&format!("Path: {}", path.display()));
            }
            print_detail(&format!("Template: {}", project.template));
            if !project.tags.is_empty() {
                print_detail(&format!("Tags: {}", project.tags.join(", ")));
            }
            print_detail(&format!("Open it with 'rshed open -n {}'", project.name));
        }
        None => print_info("Cancelled"),
    }
    Ok(())
}
