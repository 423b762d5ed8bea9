use crate::ports::outbound::TrendFormatter;
use crate::shared::Result;
use crate::trend_analysis::domain::{PackageLedgerEntry, ReportMetadata, TrendReport};
use indexmap::IndexMap;
use serde::Serialize;

/// Layout of `metadata.date`: ISO-8601 UTC without fractional seconds
const REPORT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Serialize)]
struct TrendDocument<'a> {
    metadata: Metadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_data: Option<IndexMap<&'a str, SnapshotData>>,
    packages: IndexMap<&'a str, PackageData<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    tool: &'a str,
    version: &'a str,
    date: String,
}

#[derive(Debug, Serialize)]
struct SnapshotData {
    count: usize,
    change: usize,
}

#[derive(Debug, Serialize)]
struct PackageData<'a> {
    name: &'a str,
    count: usize,
    initial_version: &'a str,
    last_version: &'a str,
    versions: usize,
    version_history: &'a IndexMap<String, usize>,
    version: &'a IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a IndexMap<String, usize>>,
}

/// JsonFormatter adapter producing the trend report wire format
///
/// Consumed by plotting and analysis tooling, so key names and the
/// omission rules (`package_data` when filtered, `license` when license
/// tracking is off) are a stable contract.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &ReportMetadata) -> Metadata<'_> {
        Metadata {
            tool: metadata.tool_name(),
            version: metadata.tool_version(),
            date: metadata.generated_at().format(REPORT_DATE_FORMAT).to_string(),
        }
    }

    fn build_package(entry: &PackageLedgerEntry) -> PackageData<'_> {
        PackageData {
            name: entry.name(),
            count: entry.total_count(),
            initial_version: entry.initial_version(),
            last_version: entry.last_version(),
            versions: entry.version_change_count(),
            version_history: entry.version_timeline(),
            version: entry.version_histogram(),
            license: entry.license_histogram(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendFormatter for JsonFormatter {
    fn format(&self, report: &TrendReport) -> Result<String> {
        let document = TrendDocument {
            metadata: Self::build_metadata(&report.metadata),
            package_data: report.global_stats.as_ref().map(|stats| {
                stats
                    .iter()
                    .map(|(timestamp, s)| {
                        (
                            timestamp.as_str(),
                            SnapshotData {
                                count: s.package_count,
                                change: s.change_count,
                            },
                        )
                    })
                    .collect()
            }),
            packages: report
                .packages
                .iter()
                .map(|(name, entry)| (name.as_str(), Self::build_package(entry)))
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
