//! CLI implementation for `rshed notes` command

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_info, print_success};
use crate::core::settings::Settings;

/// Execute the notes command
///
/// Replaces the notes when `text` is given, then shows the current notes.
pub async fn execute(settings: &Settings, name: &str, text: Option<&str>) -> Result<()> {
    let registry = settings.registry();
    let mut project = registry
        .get(name)
        .with_context(|| format!("Failed to load playground '{name}'"))?;

    if let Some(text) = text {
        project.notes = text.to_string();
        registry
            .update(&project)
            .with_context(|| format!("Failed to save notes for '{name}'"))?;
        if !is_json() {
            print_success(&format!("Updated notes for '{name}'"));
        }
    }

    if is_json() {
        let value = serde_json::json!({ "name": project.name, "notes": project.notes });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if project.notes.is_empty() {
        print_info(&format!("No notes for '{name}'"));
    } else {
        println!("{}", project.notes);
    }
    Ok(())
}
