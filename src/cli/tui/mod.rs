//! TUI (Terminal User Interface) module
//!
//! Provides the interactive playground creator.

pub mod creator;

pub use creator::{CreatorState, ProjectCreator};
