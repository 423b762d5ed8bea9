use crate::trend_analysis::domain::TrendOptions;
use crate::trend_analysis::services::DateFormat;
use std::path::PathBuf;

/// TrendRequest - request DTO for the trend analysis use case
#[derive(Debug, Clone)]
pub struct TrendRequest {
    /// Directory holding the SBOM snapshots
    pub directory: PathBuf,
    /// Only analyse the package with this exact name
    pub module: Option<String>,
    /// Whether license histograms are kept
    pub track_license: bool,
    /// Pattern used to render snapshot timestamps
    pub date_format: DateFormat,
    /// Emit per-snapshot diagnostics
    pub debug: bool,
}

impl TrendRequest {
    pub fn builder() -> TrendRequestBuilder {
        TrendRequestBuilder::default()
    }

    /// Engine options derived from this request
    pub fn trend_options(&self) -> TrendOptions {
        TrendOptions::new(self.module.clone(), self.track_license)
    }
}

/// Builder for [`TrendRequest`]
///
/// Defaults: current directory, no module filter, license tracking on,
/// the default date format, debug off.
#[derive(Debug, Clone)]
pub struct TrendRequestBuilder {
    directory: PathBuf,
    module: Option<String>,
    track_license: bool,
    date_format: DateFormat,
    debug: bool,
}

impl Default for TrendRequestBuilder {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            module: None,
            track_license: true,
            date_format: DateFormat::default(),
            debug: false,
        }
    }
}

impl TrendRequestBuilder {
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn module(mut self, module: Option<String>) -> Self {
        self.module = module;
        self
    }

    pub fn track_license(mut self, track_license: bool) -> Self {
        self.track_license = track_license;
        self
    }

    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn build(self) -> TrendRequest {
        TrendRequest {
            directory: self.directory,
            module: self.module,
            track_license: self.track_license,
            date_format: self.date_format,
            debug: self.debug,
        }
    }
}
