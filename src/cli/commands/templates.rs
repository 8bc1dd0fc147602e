//! CLI implementation for `rshed templates` command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::output::is_json;
use crate::core::template;

#[derive(Serialize)]
struct TemplateInfo<'a> {
    name: &'a str,
    description: &'a str,
    dependencies: &'a [&'a str],
    files: Vec<&'a str>,
}

/// Execute the templates command
pub async fn execute() -> Result<()> {
    let infos: Vec<TemplateInfo<'_>> = template::list()
        .values()
        .map(|t| TemplateInfo {
            name: t.name,
            description: t.description,
            dependencies: t.dependencies,
            files: t.files.keys().copied().collect(),
        })
        .collect();

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Available templates:");
    for info in &infos {
        println!("  {:<8} {}", info.name.bold(), info.description);
        if !info.dependencies.is_empty() {
            println!("           {}", format!("deps: {}", info.dependencies.join(", ")).dimmed());
        }
    }
    Ok(())
}
