use crate::adapters::outbound::sbom_parsers::SbomDocumentParser;
use crate::ports::outbound::SnapshotSource;
use crate::shared::error::TrendError;
use crate::shared::security::ensure_readable_document;
use crate::shared::Result;
use crate::trend_analysis::domain::Snapshot;
use crate::trend_analysis::services::DateFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// DirectorySnapshotSource adapter - reads SBOM documents from a directory
///
/// Only regular, non-hidden files directly inside the directory are
/// considered; sub-directories, symbolic links and dot-files are skipped.
pub struct DirectorySnapshotSource;

impl DirectorySnapshotSource {
    pub fn new() -> Self {
        Self
    }

    /// Reads a document after checking it is a regular file within the size limit
    fn read_document(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| TrendError::DocumentReadError {
            path: path.to_path_buf(),
            details,
        };
        ensure_readable_document(path).map_err(|violation| read_error(violation.to_string()))?;
        Ok(fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?)
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
    }
}

impl Default for DirectorySnapshotSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for DirectorySnapshotSource {
    fn list_entries(&self, location: &Path) -> Result<Vec<PathBuf>> {
        if !location.exists() {
            return Err(TrendError::DirectoryNotFound {
                path: location.to_path_buf(),
            }
            .into());
        }

        let read_dir = fs::read_dir(location).map_err(|e| TrendError::InvalidDirectory {
            path: location.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| TrendError::InvalidDirectory {
                path: location.to_path_buf(),
                reason: e.to_string(),
            })?;
            // file_type() does not follow symlinks, so links are never is_file()
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            let path = entry.path();
            if is_file && !Self::is_hidden(&path) {
                entries.push(path);
            }
        }

        // Lexicographic file-name order stands in for chronological order
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }

    fn load_snapshot(&self, entry: &Path, date_format: &DateFormat) -> Result<Snapshot> {
        let content = self.read_document(entry)?;
        SbomDocumentParser::normalize(entry, &content, date_format)
    }
}
