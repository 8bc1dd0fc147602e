//! rshed - a manager for throwaway Rust playgrounds
//!
//! Playgrounds are small Cargo projects kept under a single root directory,
//! each carrying a metadata record with its name, timestamps, template,
//! tags and notes. They can be listed, annotated, opened in an editor,
//! promoted to a real location or cleaned up once stale.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface, output formatting and the interactive creator
//! - [`core`] - Playground records, template catalog, registry and workflows
//! - [`infra`] - Infrastructure layer (directories, filesystem, git, processes)
//! - [`config`] - Constants and defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
