use sbom_trend::prelude::*;
use std::path::{Path, PathBuf};

/// Mock SnapshotSource serving prepared snapshots in insertion order
pub struct MockSnapshotSource {
    pub snapshots: Vec<(PathBuf, Snapshot)>,
    pub failing_entry: Option<PathBuf>,
    pub should_fail_listing: bool,
}

impl MockSnapshotSource {
    pub fn new(snapshots: Vec<Snapshot>) -> Self {
        let snapshots = snapshots
            .into_iter()
            .enumerate()
            .map(|(i, s)| (PathBuf::from(format!("bom-{:03}.json", i + 1)), s))
            .collect();
        Self {
            snapshots,
            failing_entry: None,
            should_fail_listing: false,
        }
    }

    pub fn with_failing_entry(mut self, entry: &str) -> Self {
        self.failing_entry = Some(PathBuf::from(entry));
        self
    }

    pub fn with_listing_failure() -> Self {
        Self {
            should_fail_listing: true,
            ..Self::new(Vec::new())
        }
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn list_entries(&self, _location: &Path) -> Result<Vec<PathBuf>> {
        if self.should_fail_listing {
            anyhow::bail!("Mock directory listing failure");
        }
        let mut entries: Vec<PathBuf> = self.snapshots.iter().map(|(p, _)| p.clone()).collect();
        if let Some(failing) = &self.failing_entry {
            entries.push(failing.clone());
        }
        Ok(entries)
    }

    fn load_snapshot(&self, entry: &Path, _date_format: &DateFormat) -> Result<Snapshot> {
        if self.failing_entry.as_deref() == Some(entry) {
            anyhow::bail!("Mock malformed snapshot: {}", entry.display());
        }
        self.snapshots
            .iter()
            .find(|(path, _)| path == entry)
            .map(|(_, snapshot)| snapshot.clone())
            .ok_or_else(|| anyhow::anyhow!("Unknown entry: {}", entry.display()))
    }
}
