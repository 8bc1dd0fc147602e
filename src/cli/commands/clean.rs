//! CLI implementation for `rshed clean` command
//!
//! Removes playgrounds whose last access is older than the given age.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::cli::output::{is_json, print_detail, print_success, print_warning};
use crate::core::clean::{parse_age, remove_stale, select_stale};
use crate::core::settings::Settings;

/// Execute the clean command
pub async fn execute(settings: &Settings, older_than: Option<&str>, dry_run: bool) -> Result<()> {
    let input = older_than.unwrap_or_else(|| settings.config.cleanup_age());
    let age = parse_age(input)?;

    let registry = settings.registry();
    let projects = registry.list().context("Failed to list playgrounds")?;
    let stale = select_stale(projects, age, Utc::now());
    let names: Vec<&str> = stale.iter().map(|p| p.name.as_str()).collect();

    if dry_run {
        if is_json() {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else if stale.is_empty() {
            print_success(&format!("No playgrounds older than {input}"));
        } else {
            print_success(&format!("Would remove {} playground(s):", stale.len()));
            for project in &stale {
                print_detail(&format!(
                    "{} (last accessed {})",
                    project.name,
                    project.last_accessed.format("%Y-%m-%d")
                ));
            }
        }
        return Ok(());
    }

    let result = remove_stale(&registry, &stale);

    if is_json() {
        let value = serde_json::json!({
            "removed": result.removed,
            "failed": result.failed.iter().map(|(n, _)| n).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if result.removed.is_empty() && result.failed.is_empty() {
        print_success("Nothing to clean");
        return Ok(());
    }

    if !result.removed.is_empty() {
        print_success(&format!("Removed {} playground(s):", result.removed.len()));
        for name in &result.removed {
            print_detail(name);
        }
    }
    for (name, error) in &result.failed {
        print_warning(&format!("Could not remove '{name}': {error}"));
    }
    Ok(())
}
