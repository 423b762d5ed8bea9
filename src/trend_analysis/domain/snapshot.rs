use super::PackageRecord;

/// Snapshot - the normalized package inventory of one SBOM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    timestamp: String,
    records: Vec<PackageRecord>,
}

impl Snapshot {
    /// Creates a snapshot from an already formatted timestamp and its records
    pub fn new(timestamp: impl Into<String>, records: Vec<PackageRecord>) -> Self {
        Self {
            timestamp: timestamp.into(),
            records,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Records in document order, duplicates included
    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
