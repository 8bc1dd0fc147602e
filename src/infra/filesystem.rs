//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Create a single directory, failing if it already exists
pub fn create_dir(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
///
/// A missing directory is not an error.
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Replace the content of a file whose directory must already exist
pub fn overwrite_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read the raw bytes of a file
///
/// Decoding is left to the caller so malformed text can be reported as such.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, FilesystemError> {
    std::fs::read(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// List the immediate subdirectories of `path`, in enumeration order
///
/// Returns an empty list if `path` does not exist.
pub fn list_subdirs(path: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(FilesystemError::ReadDir {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
    };

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

/// Recursively copy `src` into `dest`, skipping paths for which `skip` returns true
///
/// `skip` receives paths relative to `src`. File permission bits are carried
/// over by `std::fs::copy`; directory modes are copied explicitly. Symlinks
/// are recreated as symlinks on Unix. Nothing is rolled back on failure.
pub fn copy_tree<F>(src: &Path, dest: &Path, skip: F) -> Result<u64, FilesystemError>
where
    F: Fn(&Path) -> bool,
{
    let mut copied = 0;

    let walker = WalkDir::new(src)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| {
            e.path()
                .strip_prefix(src)
                .map(|relative| !skip(relative))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: src.to_path_buf(),
            error: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| FilesystemError::Copy {
                from: entry.path().to_path_buf(),
                to: dest.to_path_buf(),
                error: e.to_string(),
            })?;

        let target = dest.join(relative);
        let copy_err = |e: std::io::Error| FilesystemError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            error: e.to_string(),
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            create_dir_all(&target)?;
            let perms = entry.metadata().map_err(|e| FilesystemError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                error: e.to_string(),
            })?;
            std::fs::set_permissions(&target, perms.permissions()).map_err(copy_err)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target).map_err(copy_err)?;
            copied += 1;
        } else {
            std::fs::copy(entry.path(), &target).map_err(copy_err)?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    let link = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(link, dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::copy(src, dest).map(|_| ())
}
