use crate::trend_analysis::domain::{ReportMetadata, TrendReport};
use crate::trend_analysis::services::TrendLedger;
use chrono::{DateTime, Utc};

/// ReportAssembler - turns a finished ledger into a `TrendReport`
///
/// This is the boundary contract relied on by external consumers, so the
/// assembly itself performs no aggregation; it only stamps provenance and
/// decides whether the global statistics are meaningful.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Assembles a report stamped with the current UTC time
    pub fn assemble(ledger: TrendLedger, filtered: bool) -> TrendReport {
        Self::assemble_at(ledger, filtered, Utc::now())
    }

    /// Assembles a report with an explicit generation time
    pub fn assemble_at(
        ledger: TrendLedger,
        filtered: bool,
        generated_at: DateTime<Utc>,
    ) -> TrendReport {
        let (packages, snapshot_stats) = ledger.into_parts();

        TrendReport {
            metadata: Self::default_metadata(generated_at),
            global_stats: (!filtered).then_some(snapshot_stats),
            packages,
        }
    }

    /// Report metadata for this tool, using the compile-time version from Cargo.toml
    pub fn default_metadata(generated_at: DateTime<Utc>) -> ReportMetadata {
        ReportMetadata::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            generated_at,
        )
    }
}
