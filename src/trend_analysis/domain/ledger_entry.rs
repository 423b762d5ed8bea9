use super::PackageRecord;
use indexmap::IndexMap;

/// PackageLedgerEntry - the running aggregate for one package name
///
/// Entries are created on the first occurrence of a name and only ever grow:
/// counters increase, histograms gain keys, `last_version` is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLedgerEntry {
    name: String,
    total_count: usize,
    initial_version: String,
    last_version: String,
    version_change_count: usize,
    version_histogram: IndexMap<String, usize>,
    license_histogram: Option<IndexMap<String, usize>>,
    version_timeline: IndexMap<String, usize>,
}

impl PackageLedgerEntry {
    /// Creates an empty entry seeded with the version of its first record
    pub fn new(
        name: impl Into<String>,
        initial_version: impl Into<String>,
        track_license: bool,
    ) -> Self {
        let initial_version = initial_version.into();
        Self {
            name: name.into(),
            total_count: 0,
            last_version: initial_version.clone(),
            initial_version,
            version_change_count: 0,
            version_histogram: IndexMap::new(),
            license_histogram: track_license.then(IndexMap::new),
            version_timeline: IndexMap::new(),
        }
    }

    /// Folds one occurrence of this package into the entry.
    ///
    /// Returns true when the version differs from the previous occurrence.
    /// The first occurrence never counts as a change.
    pub(crate) fn record_occurrence(&mut self, record: &PackageRecord, timestamp: &str) -> bool {
        let first_occurrence = self.total_count == 0;
        self.total_count += 1;

        let changed = !first_occurrence && record.version() != self.last_version;
        if changed {
            self.version_change_count += 1;
        }
        self.last_version = record.version().to_string();

        self.version_timeline
            .insert(timestamp.to_string(), self.version_change_count);
        *self
            .version_histogram
            .entry(record.version().to_string())
            .or_insert(0) += 1;
        if let Some(licenses) = self.license_histogram.as_mut() {
            *licenses.entry(record.license().to_string()).or_insert(0) += 1;
        }

        changed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn initial_version(&self) -> &str {
        &self.initial_version
    }

    pub fn last_version(&self) -> &str {
        &self.last_version
    }

    pub fn version_change_count(&self) -> usize {
        self.version_change_count
    }

    /// Occurrences per version string
    pub fn version_histogram(&self) -> &IndexMap<String, usize> {
        &self.version_histogram
    }

    /// Occurrences per license string; `None` when license tracking is off
    pub fn license_histogram(&self) -> Option<&IndexMap<String, usize>> {
        self.license_histogram.as_ref()
    }

    /// Snapshot timestamp -> cumulative change count, one entry per snapshot
    /// in which the package appeared (sparse over the full date axis)
    pub fn version_timeline(&self) -> &IndexMap<String, usize> {
        &self.version_timeline
    }
}
