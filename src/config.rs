//! Configuration file support for sbom-trend.
//!
//! Provides YAML-based configuration through `.sbom-trend.yml` files and
//! the merge of file settings with command-line flags.

use anyhow::Context;
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::{OutputFormat, TrendRequest};
use crate::cli::Args;
use crate::shared::error::TrendError;
use crate::shared::Result;
use crate::trend_analysis::services::DateFormat;

/// Hidden so the directory scan never treats it as an SBOM
pub const CONFIG_FILENAME: &str = ".sbom-trend.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub date_format: Option<String>,
    pub module: Option<String>,
    pub exclude_license: Option<bool>,
    pub debug: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref pattern) = config.date_format {
        if pattern.trim().is_empty() {
            return Err(TrendError::ConfigValidation {
                message: "date_format must not be empty.".to_string(),
                hint: "Remove the field or set a strftime pattern such as \"%d-%b-%Y\"."
                    .to_string(),
            }
            .into());
        }
    }
    if let Some(ref format) = config.format {
        if format.parse::<OutputFormat>().is_err() {
            return Err(TrendError::ConfigValidation {
                message: format!("format '{}' is not supported.", format),
                hint: "Use either \"json\" or \"text\".".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "{} Unknown config field '{}' will be ignored.",
            "⚠️  Warning:".yellow(),
            key
        );
    }
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub directory: PathBuf,
    pub module: Option<String>,
    pub exclude_license: bool,
    pub date_format: DateFormat,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub debug: bool,
}

impl Settings {
    /// Merges `args` over `config`
    ///
    /// Values given on the command line win; boolean flags are OR-ed, so a
    /// `true` in the config file cannot be switched off from the CLI.
    ///
    /// # Errors
    /// Returns an error if the resulting date format pattern is invalid
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let date_format = match args.date_format.or(config.date_format) {
            Some(pattern) => DateFormat::new(pattern)?,
            None => DateFormat::default(),
        };

        let config_format = config
            .format
            .as_deref()
            .and_then(|f| f.parse::<OutputFormat>().ok());
        let format = args
            .format
            .or(config_format)
            .unwrap_or_else(|| OutputFormat::default_for(args.output_file.is_some()));

        Ok(Self {
            directory: args.directory,
            module: args.module.or(config.module),
            exclude_license: args.exclude_license || config.exclude_license.unwrap_or(false),
            date_format,
            format,
            output_file: args.output_file,
            debug: args.debug || config.debug.unwrap_or(false),
        })
    }

    /// Builds the use case request for these settings
    pub fn to_request(&self) -> TrendRequest {
        TrendRequest::builder()
            .directory(self.directory.clone())
            .module(self.module.clone())
            .track_license(!self.exclude_license)
            .date_format(self.date_format.clone())
            .debug(self.debug)
            .build()
    }

    /// Human-readable dump of the settings for `--debug`
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("exclude license: {}", self.exclude_license),
            format!(
                "output file: {}",
                self.output_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string())
            ),
            format!("directory: {}", self.directory.display()),
            format!("analysed module: {}", self.module.as_deref().unwrap_or("all")),
            format!("date format: {}", self.date_format),
            format!("output format: {}", self.format),
        ]
    }
}
