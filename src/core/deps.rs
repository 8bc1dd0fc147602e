//! Dependency inspection
//!
//! Lists the direct dependencies of a playground using
//! `cargo tree --depth 1 --prefix none`.

use std::path::Path;

use serde::Serialize;

use crate::error::ToolError;
use crate::infra::process;

/// A direct dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Crate name
    pub name: String,
    /// Resolved version, without the leading `v`
    pub version: String,
}

/// Run `cargo tree` in `project_dir` and parse its output
pub fn direct_dependencies(project_dir: &Path) -> Result<Vec<Dependency>, ToolError> {
    let cargo = process::locate("cargo")?;
    let output = process::capture(
        &cargo,
        &["tree", "--depth", "1", "--prefix", "none"],
        project_dir,
    )?;
    Ok(parse_tree(&output))
}

/// Parse `cargo tree --depth 1 --prefix none` output
///
/// The first line is the playground itself and is skipped, as are section
/// headers such as `[dev-dependencies]`. Duplicates are reported once.
pub fn parse_tree(output: &str) -> Vec<Dependency> {
    let mut deps: Vec<Dependency> = Vec::new();

    for line in output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .skip(1)
    {
        if line.starts_with('[') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(name), Some(version)) = (parts.next(), parts.next()) else {
            continue;
        };
        let dep = Dependency {
            name: name.to_string(),
            version: version.trim_start_matches('v').to_string(),
        };
        if !deps.contains(&dep) {
            deps.push(dep);
        }
    }

    deps
}
