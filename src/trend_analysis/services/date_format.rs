use crate::shared::error::TrendError;
use crate::shared::Result;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use std::fmt::Write;

/// Default snapshot key pattern, rendering like `01-Jan-2024`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%b-%Y";

/// A validated strftime pattern used to render snapshot timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// Validates and wraps a strftime pattern
    ///
    /// # Errors
    /// Returns `TrendError::InvalidDateFormat` for an empty pattern or one
    /// containing an unknown specifier.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let invalid = pattern.trim().is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(TrendError::InvalidDateFormat { pattern }.into());
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders a document timestamp in its own offset
    pub fn render(&self, timestamp: &DateTime<FixedOffset>) -> Result<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", timestamp.format(&self.0)).map_err(|_| {
            TrendError::InvalidDateFormat {
                pattern: self.0.clone(),
            }
        })?;
        Ok(rendered)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
