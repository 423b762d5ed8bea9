use crate::application::dto::{TrendRequest, TrendResponse};
use crate::ports::outbound::{ProgressReporter, SnapshotSource};
use crate::shared::Result;
use crate::trend_analysis::services::{ReportAssembler, TrendEngine};
use std::path::{Path, PathBuf};

/// AnalyzeTrendUseCase - folds a directory of SBOM snapshots into a report
///
/// Documents are loaded and folded one at a time, so only the ledger and the
/// current snapshot are held in memory. The first failing document aborts
/// the whole run; no partial report is produced.
///
/// # Type Parameters
/// * `S` - SnapshotSource implementation
/// * `P` - ProgressReporter implementation
pub struct AnalyzeTrendUseCase<S, P> {
    snapshot_source: S,
    progress_reporter: P,
}

impl<S, P> AnalyzeTrendUseCase<S, P>
where
    S: SnapshotSource,
    P: ProgressReporter,
{
    pub fn new(snapshot_source: S, progress_reporter: P) -> Self {
        Self {
            snapshot_source,
            progress_reporter,
        }
    }

    /// Executes the trend analysis
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed or any document
    /// fails to load or normalize.
    pub fn execute(&self, request: TrendRequest) -> Result<TrendResponse> {
        let entries = self.list_and_report_entries(&request.directory)?;

        let options = request.trend_options();
        let filtered = options.is_filtered();
        let mut engine = TrendEngine::new(options);

        let total = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let snapshot = match self
                .snapshot_source
                .load_snapshot(entry, &request.date_format)
            {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Failed to load {}", entry.display()));
                    return Err(e);
                }
            };

            let stats = engine.fold_snapshot(&snapshot);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&display_name(entry)));

            if request.debug {
                self.progress_reporter.report(&format!(
                    "🔍 {} [{}] count {} change {}",
                    display_name(entry),
                    snapshot.timestamp(),
                    stats.package_count,
                    stats.change_count
                ));
            }
        }

        let ledger = engine.into_ledger();
        let snapshot_count = ledger.snapshots_processed();
        self.progress_reporter.report_completion(&format!(
            "✅ Processed {} snapshot(s), tracked {} package(s)",
            snapshot_count,
            ledger.packages().len()
        ));

        let report = ReportAssembler::assemble(ledger, filtered);
        Ok(TrendResponse::new(report, snapshot_count))
    }

    fn list_and_report_entries(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        self.progress_reporter.report(&format!(
            "📖 Scanning SBOM documents in: {}",
            directory.display()
        ));

        let entries = self.snapshot_source.list_entries(directory)?;

        if entries.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No SBOM documents found; the report will be empty.");
        } else {
            self.progress_reporter
                .report(&format!("📂 Found {} SBOM document(s)", entries.len()));
        }
        Ok(entries)
    }
}

fn display_name(entry: &Path) -> String {
    entry
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.display().to_string())
}
