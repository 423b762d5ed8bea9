//! SBOM document normalization.
//!
//! Detects CycloneDX and SPDX documents (JSON, YAML, SPDX tag-value) and
//! reduces them to the `Snapshot` shape the trend engine consumes.

mod cyclonedx;
mod spdx;
mod tag_value;

use crate::shared::error::TrendError;
use crate::shared::Result;
use crate::trend_analysis::domain::{PackageRecord, Snapshot};
use crate::trend_analysis::services::{DateFormat, TimestampParser};
use cyclonedx::CycloneDxDocument;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use spdx::SpdxDocument;
use std::path::Path;

/// Document family identified from a structured document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SbomFormat {
    CycloneDx,
    Spdx,
}

impl SbomFormat {
    fn name(&self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
        }
    }
}

/// Format-independent content of one document, before timestamp handling
#[derive(Debug)]
pub(crate) struct RawDocument {
    pub(crate) created: Option<String>,
    pub(crate) records: Vec<PackageRecord>,
}

/// Reads a string-like field that YAML may have typed as a number or boolean
///
/// `version: 3.7` arrives as a float; it is kept as its text form `"3.7"`.
pub(crate) fn scalar_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid type: expected a string, found {}",
            other
        ))),
    }
}

/// [`scalar_text`] for names, where an absent value becomes empty
pub(crate) fn scalar_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

/// SbomDocumentParser - turns document content into a `Snapshot`
pub struct SbomDocumentParser;

impl SbomDocumentParser {
    /// Parses and normalizes a document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The format is not recognised
    /// - The document does not match its format's structure
    /// - The creation timestamp is missing or unparsable
    /// - The timestamp cannot be rendered with `date_format`
    pub fn normalize(path: &Path, content: &str, date_format: &DateFormat) -> Result<Snapshot> {
        let raw = Self::parse(path, content)?;

        let created = raw
            .created
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| TrendError::MissingTimestamp {
                path: path.to_path_buf(),
            })?;
        let timestamp =
            TimestampParser::parse(&created).ok_or_else(|| TrendError::TimestampParseError {
                path: path.to_path_buf(),
                value: created.clone(),
            })?;

        let records = raw
            .records
            .into_iter()
            .filter(|record| !record.name().trim().is_empty())
            .collect();

        Ok(Snapshot::new(date_format.render(&timestamp)?, records))
    }

    fn parse(path: &Path, content: &str) -> Result<RawDocument> {
        if !content.trim_start().starts_with('{') && tag_value::is_tag_value(content) {
            return Ok(tag_value::parse(content));
        }

        let value = Self::structured_value(path, content)?.ok_or_else(|| {
            TrendError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;
        let format = Self::detect_value(&value).ok_or_else(|| TrendError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let parse_error = |e: serde_json::Error| TrendError::DocumentParseError {
            path: path.to_path_buf(),
            format: format.name().to_string(),
            details: e.to_string(),
        };
        let raw = match format {
            SbomFormat::CycloneDx => serde_json::from_value::<CycloneDxDocument>(value)
                .map_err(parse_error)?
                .into_raw(),
            SbomFormat::Spdx => serde_json::from_value::<SpdxDocument>(value)
                .map_err(parse_error)?
                .into_raw(),
        };

        Ok(raw)
    }

    /// Loads JSON or YAML content into a generic value.
    ///
    /// Returns `Ok(None)` for content that is neither.
    fn structured_value(path: &Path, content: &str) -> Result<Option<Value>> {
        if content.trim_start().starts_with('{') {
            let value = serde_json::from_str(content).map_err(|e| TrendError::DocumentParseError {
                path: path.to_path_buf(),
                format: "JSON".to_string(),
                details: e.to_string(),
            })?;
            return Ok(Some(value));
        }

        if Self::is_yaml_path(path) {
            let value =
                serde_yaml_ng::from_str(content).map_err(|e| TrendError::DocumentParseError {
                    path: path.to_path_buf(),
                    format: "YAML".to_string(),
                    details: e.to_string(),
                })?;
            return Ok(Some(value));
        }

        Ok(None)
    }

    fn detect_value(value: &Value) -> Option<SbomFormat> {
        if value.get("bomFormat").and_then(Value::as_str) == Some("CycloneDX") {
            Some(SbomFormat::CycloneDx)
        } else if value.get("spdxVersion").is_some() {
            Some(SbomFormat::Spdx)
        } else {
            None
        }
    }

    fn is_yaml_path(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false)
    }
}
