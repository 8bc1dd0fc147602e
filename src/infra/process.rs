//! External process invocation
//!
//! Thin wrappers over `std::process::Command` that resolve binaries on PATH
//! and map failures to [`ToolError`].

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ToolError;

/// Locate a binary on PATH
pub fn locate(tool: &str) -> Result<PathBuf, ToolError> {
    which::which(tool).map_err(|_| ToolError::NotFound {
        tool: tool.to_string(),
    })
}

/// Run a tool to completion and capture stdout
///
/// A non-zero exit status is reported as [`ToolError::Failed`] with the
/// captured stderr.
pub fn capture(program: &Path, args: &[&str], cwd: &Path) -> Result<String, ToolError> {
    let tool = display_name(program);
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ToolError::Spawn {
            tool: tool.clone(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a tool with stdio connected to ours, blocking until it exits
pub fn run_interactive(program: &Path, args: &[String]) -> Result<(), ToolError> {
    let tool = display_name(program);
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ToolError::Spawn {
            tool: tool.clone(),
            error: e.to_string(),
        })?;

    if !status.success() {
        return Err(ToolError::Failed {
            tool,
            status: status.to_string(),
            stderr: String::new(),
        });
    }
    Ok(())
}

/// Split an editor command line such as `code -n` into program and arguments
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Open `path` in the given editor command
pub fn launch_editor(editor: &str, path: &Path) -> Result<(), ToolError> {
    let (program, mut args) = split_command(editor).ok_or_else(|| ToolError::NotFound {
        tool: editor.to_string(),
    })?;
    let binary = locate(&program)?;
    args.push(path.display().to_string());

    tracing::debug!("Launching editor: {} {:?}", binary.display(), args);
    run_interactive(&binary, &args)
}

fn display_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}
