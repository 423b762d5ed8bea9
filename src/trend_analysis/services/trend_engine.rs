use crate::trend_analysis::domain::{
    GlobalSnapshotStats, PackageLedgerEntry, Snapshot, TrendOptions, TrendReport,
};
use crate::trend_analysis::services::ReportAssembler;
use indexmap::IndexMap;

/// TrendLedger - the complete fold state of an aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendLedger {
    packages: IndexMap<String, PackageLedgerEntry>,
    snapshot_stats: IndexMap<String, GlobalSnapshotStats>,
    snapshots_processed: usize,
}

impl TrendLedger {
    /// Package entries in order of first appearance
    pub fn packages(&self) -> &IndexMap<String, PackageLedgerEntry> {
        &self.packages
    }

    /// Per-snapshot statistics in processing order
    pub fn snapshot_stats(&self) -> &IndexMap<String, GlobalSnapshotStats> {
        &self.snapshot_stats
    }

    pub fn snapshots_processed(&self) -> usize {
        self.snapshots_processed
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        IndexMap<String, PackageLedgerEntry>,
        IndexMap<String, GlobalSnapshotStats>,
    ) {
        (self.packages, self.snapshot_stats)
    }
}

/// TrendEngine - folds an ordered sequence of snapshots into a ledger
///
/// Snapshots are treated as chronological in the order they are folded.
/// The engine performs no sorting: a mis-ordered input yields a mis-ordered
/// timeline. Each run must use a fresh engine.
#[derive(Debug, Clone)]
pub struct TrendEngine {
    options: TrendOptions,
    ledger: TrendLedger,
}

impl TrendEngine {
    pub fn new(options: TrendOptions) -> Self {
        Self {
            options,
            ledger: TrendLedger::default(),
        }
    }

    /// Folds every snapshot with a fresh engine and assembles the report
    pub fn process<'a, I>(snapshots: I, options: TrendOptions) -> TrendReport
    where
        I: IntoIterator<Item = &'a Snapshot>,
    {
        let mut engine = Self::new(options);
        for snapshot in snapshots {
            engine.fold_snapshot(snapshot);
        }
        let filtered = engine.options.is_filtered();
        ReportAssembler::assemble(engine.into_ledger(), filtered)
    }

    /// Folds one snapshot into the ledger and returns the statistics
    /// recorded for it.
    pub fn fold_snapshot(&mut self, snapshot: &Snapshot) -> GlobalSnapshotStats {
        let timestamp = snapshot.timestamp();
        let mut package_count = 0;
        let mut change_count = 0;

        for record in snapshot.records() {
            if !self.options.accepts(record.name()) {
                continue;
            }
            package_count += 1;

            let track_license = self.options.track_license();
            let entry = self
                .ledger
                .packages
                .entry(record.name().to_string())
                .or_insert_with(|| {
                    PackageLedgerEntry::new(record.name(), record.version(), track_license)
                });

            if entry.record_occurrence(record, timestamp) {
                change_count += 1;
            }
        }

        // No baseline exists for the first snapshot, so nothing in it is a change.
        if self.ledger.snapshots_processed == 0 {
            change_count = 0;
        }
        self.ledger.snapshots_processed += 1;

        let stats = GlobalSnapshotStats::new(package_count, change_count);
        self.ledger
            .snapshot_stats
            .insert(timestamp.to_string(), stats);
        stats
    }

    pub fn options(&self) -> &TrendOptions {
        &self.options
    }

    pub fn ledger(&self) -> &TrendLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> TrendLedger {
        self.ledger
    }
}
