/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_source;

pub use formatter::TrendFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_source::SnapshotSource;
