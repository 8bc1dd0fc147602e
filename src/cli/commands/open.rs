//! CLI implementation for `rshed open` command

use anyhow::{Context, Result};

use crate::cli::output::print_info;
use crate::core::settings::Settings;
use crate::infra::process;

/// Execute the open command
pub async fn execute(settings: &Settings, name: &str) -> Result<()> {
    let project = settings
        .registry()
        .touch(name)
        .with_context(|| format!("Failed to open playground '{name}'"))?;
    let path = project
        .path
        .unwrap_or_else(|| settings.projects_root().join(name));

    let editor = settings.config.editor();
    print_info(&format!("Opening '{name}' with {editor}"));

    tokio::task::spawn_blocking(move || process::launch_editor(&editor, &path))
        .await
        .context("Editor task panicked")?
        .context("Failed to launch editor")?;
    Ok(())
}
