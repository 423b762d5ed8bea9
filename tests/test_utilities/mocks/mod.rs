/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_snapshot_source;

pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
pub use mock_snapshot_source::MockSnapshotSource;
