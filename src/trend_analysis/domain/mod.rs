pub mod ledger_entry;
pub mod package_record;
pub mod snapshot;
pub mod snapshot_stats;
pub mod trend_options;
pub mod trend_report;

pub use ledger_entry::PackageLedgerEntry;
pub use package_record::{PackageRecord, MISSING_VERSION, NO_LICENSE};
pub use snapshot::Snapshot;
pub use snapshot_stats::GlobalSnapshotStats;
pub use trend_options::TrendOptions;
pub use trend_report::{ReportMetadata, TrendReport};
