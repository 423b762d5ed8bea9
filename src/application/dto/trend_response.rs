use crate::trend_analysis::domain::TrendReport;

/// TrendResponse - response DTO from the trend analysis use case
#[derive(Debug, Clone)]
pub struct TrendResponse {
    /// The assembled report, ready for a formatter
    pub report: TrendReport,
    /// Number of snapshots folded into the report
    pub snapshot_count: usize,
}

impl TrendResponse {
    pub fn new(report: TrendReport, snapshot_count: usize) -> Self {
        Self {
            report,
            snapshot_count,
        }
    }
}
