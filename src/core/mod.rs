//! Core business logic module
//!
//! Playground records and the operations over them. Filesystem and process
//! access goes through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`project`] - Playground record and metadata codec
//! - [`template`] - Built-in template catalog
//! - [`registry`] - Directory-backed playground store
//! - [`global_config`] - Persisted configuration record
//! - [`settings`] - Resolved directories plus configuration
//! - [`workspace`] - Workspace create/list/switch
//! - [`listing`] - Filtering and ordering for `list`
//! - [`clean`] - Stale playground cleanup
//! - [`promote`] - Moving a playground out of the registry
//! - [`deps`] - Direct dependency inspection

pub mod clean;
pub mod deps;
pub mod global_config;
pub mod listing;
pub mod project;
pub mod promote;
pub mod registry;
pub mod settings;
pub mod template;
pub mod workspace;
