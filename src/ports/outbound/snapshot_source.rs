use crate::shared::Result;
use crate::trend_analysis::domain::Snapshot;
use crate::trend_analysis::services::DateFormat;
use std::path::{Path, PathBuf};

/// SnapshotSource port - the Snapshot Normalizer boundary
///
/// Turns a location holding SBOM documents into normalized snapshots.
/// The aggregation core depends only on the `Snapshot` shape, never on how
/// documents are found or parsed.
pub trait SnapshotSource {
    /// Lists the documents at `location` in processing order
    ///
    /// The order is lexicographic by entry name, which is taken as the
    /// chronological order of the snapshots.
    ///
    /// # Errors
    /// Returns an error if the location cannot be listed
    fn list_entries(&self, location: &Path) -> Result<Vec<PathBuf>>;

    /// Loads one document and normalizes it into a snapshot whose timestamp
    /// is rendered with `date_format`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document cannot be read
    /// - The document format is not recognised or cannot be parsed
    /// - The document timestamp is missing or unparsable
    fn load_snapshot(&self, entry: &Path, date_format: &DateFormat) -> Result<Snapshot>;
}
