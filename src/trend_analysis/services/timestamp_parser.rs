use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Naive date-time layouts accepted after RFC 3339; interpreted as UTC
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// TimestampParser - parses SBOM creation timestamps
///
/// Accepted, in order: RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]`,
/// naive `YYYY-MM-DD HH:MM:SS[.f]`, and `YYYY-MM-DD`.
pub struct TimestampParser;

impl TimestampParser {
    /// Returns `None` when the value matches no accepted layout
    pub fn parse(value: &str) -> Option<DateTime<FixedOffset>> {
        let value = value.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Some(timestamp);
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Some(naive.and_utc().fixed_offset());
            }
        }

        NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    }
}
