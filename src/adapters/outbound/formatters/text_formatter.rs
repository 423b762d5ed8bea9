use crate::ports::outbound::TrendFormatter;
use crate::shared::Result;
use crate::trend_analysis::domain::{PackageLedgerEntry, TrendReport};
use indexmap::IndexMap;
use std::fmt::Write;

/// Separator printed after each package
const RULE: &str = "========================================";

/// TextFormatter adapter for the human-readable summary
///
/// Lists every package with its occurrence count and version histogram
/// (sorted by version string), plus the license histogram when licenses
/// were tracked. In debug mode the summary is preceded by one line per
/// snapshot with its package and change counts.
pub struct TextFormatter {
    debug: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(debug: bool) -> Self {
        Self { debug }
    }

    fn render_histogram<'a, I>(entries: I) -> String
    where
        I: IntoIterator<Item = (&'a String, &'a usize)>,
    {
        let body = entries
            .into_iter()
            .map(|(key, count)| format!("'{}': {}", key, count))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", body)
    }

    fn render_package(output: &mut String, entry: &PackageLedgerEntry) -> std::fmt::Result {
        writeln!(output, "Name {}", entry.name())?;
        writeln!(output, "Count {}", entry.total_count())?;

        let mut versions: Vec<_> = entry.version_histogram().iter().collect();
        versions.sort_by(|a, b| a.0.cmp(b.0));
        writeln!(output, "Versions {}", versions.len())?;
        writeln!(output, "Version {}", Self::render_histogram(versions))?;

        if let Some(licenses) = entry.license_histogram() {
            writeln!(output, "Licenses {}", licenses.len())?;
            writeln!(output, "License {}", Self::render_histogram(licenses))?;
        }
        writeln!(output, "{}", RULE)
    }

    fn render_snapshot_stats(
        output: &mut String,
        stats: &IndexMap<String, crate::trend_analysis::domain::GlobalSnapshotStats>,
    ) -> std::fmt::Result {
        for (timestamp, s) in stats {
            writeln!(
                output,
                "{} count {} change {}",
                timestamp, s.package_count, s.change_count
            )?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendFormatter for TextFormatter {
    fn format(&self, report: &TrendReport) -> Result<String> {
        let mut output = String::new();

        if self.debug {
            if let Some(stats) = report.global_stats.as_ref() {
                Self::render_snapshot_stats(&mut output, stats)?;
            }
        }
        for entry in report.packages.values() {
            Self::render_package(&mut output, entry)?;
        }

        Ok(output)
    }
}
