//! CLI implementation for `rshed workspace` commands

use anyhow::{Context, Result};
use colored::Colorize;

use super::WorkspaceCommands;
use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::settings::Settings;
use crate::core::workspace::{self, DEFAULT_WORKSPACE};

/// Execute a workspace subcommand
pub async fn execute(mut settings: Settings, cmd: WorkspaceCommands) -> Result<()> {
    match cmd {
        WorkspaceCommands::Create { name, default } => {
            let path = workspace::create(&settings.dirs, &name)
                .with_context(|| format!("Failed to create workspace '{name}'"))?;
            print_success(&format!("Created workspace '{name}'"));
            print_detail(&format!("Path: {}", path.display()));

            if default {
                switch(&mut settings, &name)?;
            }
            Ok(())
        }
        WorkspaceCommands::List => list(&settings),
        WorkspaceCommands::Switch { name } => switch(&mut settings, &name),
    }
}

fn switch(settings: &mut Settings, name: &str) -> Result<()> {
    workspace::switch(&settings.dirs, &mut settings.config, name)
        .with_context(|| format!("Failed to switch to workspace '{name}'"))?;
    settings.save().context("Failed to save configuration")?;

    print_success(&format!("Switched to workspace '{name}'"));
    print_detail(&format!("Projects root: {}", settings.projects_root().display()));
    Ok(())
}

fn list(settings: &Settings) -> Result<()> {
    let entries = workspace::list(&settings.dirs, &settings.config)
        .context("Failed to list workspaces")?;
    let on_default = settings.config.workspace.is_none();

    if is_json() {
        let current = settings
            .config
            .workspace
            .as_deref()
            .unwrap_or(DEFAULT_WORKSPACE);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        let value = serde_json::json!({ "current": current, "workspaces": names });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let marker = |current: bool| if current { "*".green().to_string() } else { " ".to_string() };
    println!("{} {}", marker(on_default), DEFAULT_WORKSPACE);
    for entry in &entries {
        println!("{} {}", marker(entry.current), entry.name);
    }
    Ok(())
}
