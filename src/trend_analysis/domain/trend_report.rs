use super::{GlobalSnapshotStats, PackageLedgerEntry};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Provenance of a report: which tool produced it and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    tool_name: String,
    tool_version: String,
    generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn new(
        tool_name: impl Into<String>,
        tool_version: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            generated_at,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// TrendReport - the final output of an aggregation run
///
/// `global_stats` is `None` when the run was restricted to a single package,
/// because the per-snapshot counters would then describe a partial inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendReport {
    pub metadata: ReportMetadata,
    pub global_stats: Option<IndexMap<String, GlobalSnapshotStats>>,
    pub packages: IndexMap<String, PackageLedgerEntry>,
}
