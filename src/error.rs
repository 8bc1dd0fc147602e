//! Error types for rshed
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No project directory with this name
    #[error("Playground '{name}' does not exist")]
    NotFound { name: String },

    /// A directory with this name already exists under the root
    #[error("Playground '{name}' already exists")]
    AlreadyExists { name: String },

    /// Name cannot be used as a directory name
    #[error("Invalid playground name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Directory exists but has no metadata record
    #[error("Directory '{path}' has no playground metadata ('{name}' is not a valid playground)")]
    MissingMetadata { name: String, path: PathBuf },

    /// Metadata record exists but could not be decoded
    #[error("Failed to parse metadata for playground '{name}': {error}")]
    Parse { name: String, error: String },

    /// Record could not be serialized
    #[error("Failed to encode metadata for playground '{name}': {error}")]
    Encode { name: String, error: String },

    /// Template catalog lookup failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Filesystem failure
    #[error(transparent)]
    Io(#[from] FilesystemError),
}

/// Template catalog errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Unknown template identifier
    #[error("Template '{name}' not found")]
    NotFound { name: String },
}

/// Metadata codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// Serialization failed
    #[error("Failed to encode metadata: {0}")]
    Encode(String),

    /// Input is not a valid metadata record
    #[error("Failed to decode metadata: {0}")]
    Decode(String),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to read a directory listing
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to copy a file or tree entry
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// External tool errors (editor, git, cargo)
#[derive(Error, Debug)]
pub enum ToolError {
    /// Binary not found on PATH
    #[error("'{tool}' was not found on PATH")]
    NotFound { tool: String },

    /// Process could not be started
    #[error("Failed to run '{tool}': {error}")]
    Spawn { tool: String, error: String },

    /// Process exited unsuccessfully
    #[error("'{tool}' exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },
}

/// Workspace errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Workspace directory is missing
    #[error("Workspace '{name}' does not exist")]
    NotFound { name: String },

    /// Workspace name cannot be used as a directory name
    #[error("Invalid workspace name '{name}'")]
    InvalidName { name: String },

    /// Filesystem failure
    #[error(transparent)]
    Io(#[from] FilesystemError),
}

/// Cleanup errors
#[derive(Error, Debug)]
pub enum CleanError {
    /// Age string could not be parsed
    #[error("Invalid duration '{input}': expected e.g. 720h, 30d, 1h30m")]
    InvalidAge { input: String },
}

/// Promote errors
#[derive(Error, Debug)]
pub enum PromoteError {
    /// Destination path is already taken
    #[error("Destination '{path}' already exists")]
    DestinationExists { path: PathBuf },

    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
