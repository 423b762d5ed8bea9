use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TrendFormatter;

/// Factory for creating trend report formatters
///
/// Selects the formatter adapter for the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `debug` only affects the text summary, which then starts with one
    /// line of statistics per snapshot.
    ///
    /// # Examples
    /// ```
    /// use sbom_trend::application::dto::OutputFormat;
    /// use sbom_trend::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, debug: bool) -> Box<dyn TrendFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::with_debug(debug)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_trend::application::dto::OutputFormat;
    /// use sbom_trend::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON trend report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON trend report...",
            OutputFormat::Text => "📝 Generating text summary...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend_analysis::domain::{PackageRecord, Snapshot, TrendOptions};
    use crate::trend_analysis::services::TrendEngine;

    fn sample_report() -> crate::trend_analysis::domain::TrendReport {
        let snapshots = vec![Snapshot::new(
            "01-Jan-2024",
            vec![PackageRecord::new("pkgA", Some("1.0".to_string()), None)],
        )];
        TrendEngine::process(&snapshots, TrendOptions::default())
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json, false)
            .format(&sample_report())
            .unwrap();
        assert!(output.starts_with('{'));
        assert!(output.contains("\"packages\""));
    }

    #[test]
    fn test_create_text_formatter() {
        let output = FormatterFactory::create(OutputFormat::Text, false)
            .format(&sample_report())
            .unwrap();
        assert!(output.starts_with("Name pkgA"));
    }

    #[test]
    fn test_create_text_formatter_with_debug() {
        let output = FormatterFactory::create(OutputFormat::Text, true)
            .format(&sample_report())
            .unwrap();
        assert!(output.starts_with("01-Jan-2024 count 1 change 0"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON trend report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Text),
            "📝 Generating text summary..."
        );
    }
}
