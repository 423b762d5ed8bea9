/// Trend analysis core - the domain model and the aggregation engine
///
/// Nothing in this module touches the file system or knows about SBOM
/// wire formats; it folds normalized snapshots into a `TrendReport`.
pub mod domain;
pub mod services;
