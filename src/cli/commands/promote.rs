//! CLI implementation for `rshed promote` command

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_success};
use crate::core::promote::promote;
use crate::core::settings::Settings;

/// Execute the promote command
pub async fn execute(settings: &Settings, name: &str, destination: Option<PathBuf>) -> Result<()> {
    let destination = match destination {
        Some(destination) => destination,
        None => std::env::current_dir()
            .context("Failed to get current directory")?
            .join(name),
    };

    let result = promote(&settings.registry(), name, &destination)
        .with_context(|| format!("Failed to promote playground '{name}'"))?;

    print_success(&format!(
        "Promoted '{name}' to {}",
        result.destination.display()
    ));
    print_detail(&format!("{} files copied", result.files));
    Ok(())
}
