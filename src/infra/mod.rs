//! Infrastructure layer
//!
//! Handles all I/O with the outside world: filesystem, platform
//! directories and external processes.

pub mod dirs;
pub mod filesystem;
pub mod git;
pub mod process;
