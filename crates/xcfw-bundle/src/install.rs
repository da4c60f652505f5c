//! Installing a selected framework at its output path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};

/// Places a framework directory at a destination path.
pub trait Installer {
    /// Install the tree at `source` as `destination`.
    fn install(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// Recursive directory copy that replaces whatever is at the destination.
///
/// Symbolic links in the source are followed and their targets copied.
/// A link that points at nothing is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryCopy;

impl Installer for DirectoryCopy {
    fn install(&self, source: &Path, destination: &Path) -> Result<()> {
        if !source.is_dir() {
            return Err(BundleError::Copy {
                path: source.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "framework directory not found",
                ),
            });
        }

        reject_overlap(source, destination)?;
        remove_existing(destination)?;
        log::info!("copying {} -> {}", source.display(), destination.display());
        copy_dir_recursive(source, destination)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BundleError + '_ {
    move |source| BundleError::Copy {
        path: path.to_path_buf(),
        source,
    }
}

/// Canonical form of `path`, resolving the longest existing prefix and
/// appending the components that do not exist yet.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        let candidate = if existing.as_os_str().is_empty() {
            Path::new(".")
        } else {
            existing
        };
        match fs::canonicalize(candidate) {
            Ok(base) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(base, |acc: PathBuf, name| acc.join(name)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                match (existing.parent(), existing.file_name()) {
                    (Some(parent), Some(name)) => {
                        missing.push(name);
                        existing = parent;
                    }
                    _ => return Err(e),
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// The destination must not be the source, one of its ancestors, or a path
/// inside it: replacing it would delete the framework being copied.
fn reject_overlap(source: &Path, destination: &Path) -> Result<()> {
    let src = resolve(source).map_err(io_error(source))?;
    let dst = resolve(destination).map_err(io_error(destination))?;

    if src.starts_with(&dst) || dst.starts_with(&src) {
        return Err(BundleError::Copy {
            path: destination.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("destination overlaps framework directory {}", source.display()),
            ),
        });
    }
    Ok(())
}

/// Remove a previous install so stale files don't survive.
fn remove_existing(destination: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(destination) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_error(destination)(e)),
    };

    log::debug!("replacing existing {}", destination.display());
    if meta.is_dir() {
        fs::remove_dir_all(destination).map_err(io_error(destination))
    } else {
        fs::remove_file(destination).map_err(io_error(destination))
    }
}

fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination).map_err(io_error(destination))?;

    for entry in fs::read_dir(source).map_err(io_error(source))? {
        let entry = entry.map_err(io_error(source))?;
        let src_path = entry.path();
        let dst_path = destination.join(entry.file_name());

        // Follows symlinks, so a dangling link fails here.
        let meta = match fs::metadata(&src_path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BundleError::DanglingSymlink { path: src_path });
            }
            Err(e) => return Err(io_error(&src_path)(e)),
        };

        if meta.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else if meta.is_file() {
            fs::copy(&src_path, &dst_path).map_err(io_error(&dst_path))?;
        } else {
            log::warn!("skipping special file {}", src_path.display());
        }
    }

    Ok(())
}
