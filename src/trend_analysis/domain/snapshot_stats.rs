/// Global statistics recorded for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalSnapshotStats {
    /// Number of (unfiltered) package records in the snapshot, duplicates included
    pub package_count: usize,
    /// Number of records whose version differs from the package's previous occurrence
    pub change_count: usize,
}

impl GlobalSnapshotStats {
    pub fn new(package_count: usize, change_count: usize) -> Self {
        Self {
            package_count,
            change_count,
        }
    }
}
