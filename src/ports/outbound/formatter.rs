use crate::shared::Result;
use crate::trend_analysis::domain::TrendReport;

/// TrendFormatter port for rendering a finished report
///
/// Implementations decide the presentation (JSON wire format, plain text
/// summary); the report itself is never modified.
pub trait TrendFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &TrendReport) -> Result<String>;
}
