//! Playground records and the metadata codec
//!
//! A [`Project`] is persisted as a small TOML record inside its own
//! directory. The directory location (`path`) is derived from the registry
//! root and the name every time the record is loaded and is never written.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A managed playground
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique name, also the directory name
    pub name: String,

    /// Creation time, never changed after creation
    pub created: DateTime<Utc>,

    /// Last time the playground was opened or touched
    #[serde(rename = "lastAccessed")]
    pub last_accessed: DateTime<Utc>,

    /// Template the initial files were materialized from
    pub template: String,

    /// Free-form labels, in the order given
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Absolute directory location, derived as `root/name`
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Project {
    /// Build a fresh record with `created == last_accessed == now`
    pub fn new(name: &str, template: &str, tags: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            created: now,
            last_accessed: now,
            template: template.to_string(),
            tags,
            notes: String::new(),
            path: None,
        }
    }

    /// Mark the playground as accessed at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
    }

    /// Check whether any tag matches `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Request to create a playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Playground name
    pub name: String,
    /// Requested template identifier
    pub template: String,
    /// Initial tags
    pub tags: Vec<String>,
}

impl NewProject {
    /// Create a request
    pub fn new(name: impl Into<String>, template: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            tags,
        }
    }
}

/// Serialize a record to its pretty-printed TOML form
///
/// The derived `path` is never part of the output.
pub fn encode(project: &Project) -> Result<String, CodecError> {
    toml::to_string_pretty(project).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Parse a record; the returned project always has `path == None`
pub fn decode(content: &str) -> Result<Project, CodecError> {
    toml::from_str(content).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Check that `name` can be used as a single directory name
///
/// Returns the reason on rejection.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name != name.trim() {
        return Err("name cannot start or end with whitespace".to_string());
    }
    if name.starts_with('.') {
        return Err("name cannot start with '.'".to_string());
    }
    if name.contains(&['/', '\\', '\0'][..]) {
        return Err("name cannot contain path separators".to_string());
    }
    Ok(())
}

/// Split a comma-separated tag list exactly as given
///
/// Entries keep surrounding whitespace and empty entries are kept; only an
/// empty input yields no tags.
pub fn split_tags(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(String::from).collect()
}

/// Split a comma-separated tag list, trimming entries and dropping empty ones
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
