//! Promote logic
//!
//! Moves a playground out of the registry into a regular directory: the
//! files are copied (without the metadata record) and the registry copy is
//! removed afterwards. A copy failure leaves the registry copy untouched.

use std::path::{Path, PathBuf};

use crate::core::registry::Registry;
use crate::error::PromoteError;

/// Result of a promote operation
#[derive(Debug)]
pub struct PromoteResult {
    /// Where the files now live
    pub destination: PathBuf,
    /// Number of files copied
    pub files: u64,
}

/// Promote the playground `name` to `destination`
///
/// `destination` must not exist yet.
pub fn promote(registry: &Registry, name: &str, destination: &Path) -> Result<PromoteResult, PromoteError> {
    let project = registry.get(name)?;

    if destination.exists() {
        return Err(PromoteError::DestinationExists {
            path: destination.to_path_buf(),
        });
    }

    let files = registry.copy_to(&project, destination)?;
    registry.remove(name)?;
    tracing::info!("Promoted '{}' to {}", name, destination.display());

    Ok(PromoteResult {
        destination: destination.to_path_buf(),
        files,
    })
}
