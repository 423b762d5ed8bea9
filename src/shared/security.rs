//! File-system guards applied before an SBOM document is read or a report
//! is written.

use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Largest SBOM document that will be loaded (100 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// A path that failed one of the guards
#[derive(Debug, Error)]
pub enum PathViolation {
    #[error("Security: {path} is a symbolic link; {operation} through symbolic links is not allowed")]
    SymbolicLink {
        path: String,
        operation: &'static str,
    },

    #[error("{path} is not a regular file")]
    NotRegularFile { path: String },

    #[error("Security: {path} is too large ({size} bytes, limit is {limit} bytes)")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[error("Cannot inspect {path}: {source}")]
    Inspect {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn inspect(path: &Path) -> Result<Metadata, PathViolation> {
    fs::symlink_metadata(path).map_err(|source| PathViolation::Inspect {
        path: path.display().to_string(),
        source,
    })
}

/// Rejects a symbolic link and returns the metadata of the path itself
///
/// `symlink_metadata` is used so the link is inspected, never its target.
pub fn ensure_not_symlink(path: &Path, operation: &'static str) -> Result<Metadata, PathViolation> {
    let metadata = inspect(path)?;
    if metadata.is_symlink() {
        return Err(PathViolation::SymbolicLink {
            path: path.display().to_string(),
            operation,
        });
    }
    Ok(metadata)
}

/// Like [`ensure_not_symlink`], but a path that does not exist yet passes
pub fn ensure_not_symlink_if_present(
    path: &Path,
    operation: &'static str,
) -> Result<(), PathViolation> {
    match ensure_not_symlink(path, operation) {
        Err(PathViolation::Inspect { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(())
        }
        other => other.map(|_| ()),
    }
}

/// Checks that `path` is a regular file no larger than [`MAX_DOCUMENT_SIZE`]
///
/// Returns the file size in bytes.
pub fn ensure_readable_document(path: &Path) -> Result<u64, PathViolation> {
    let metadata = ensure_not_symlink(path, "reading")?;
    if !metadata.is_file() {
        return Err(PathViolation::NotRegularFile {
            path: path.display().to_string(),
        });
    }
    ensure_size_within(metadata.len(), path, MAX_DOCUMENT_SIZE)?;
    Ok(metadata.len())
}

pub fn ensure_size_within(size: u64, path: &Path, limit: u64) -> Result<(), PathViolation> {
    if size > limit {
        return Err(PathViolation::TooLarge {
            path: path.display().to_string(),
            size,
            limit,
        });
    }
    Ok(())
}
