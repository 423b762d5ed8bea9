use std::path::PathBuf;
use thiserror::Error;

/// Process exit status. Argument errors exit with 2 from clap itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// Anything that stops the run after arguments were accepted
    ApplicationError = 1,
    InvalidArguments = 2,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Errors that abort a trend run; each message ends with a hint for the user.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("Directory not found: {path}\n\n💡 Hint: Specify an existing directory with the --directory option")]
    DirectoryNotFound { path: PathBuf },

    #[error("Invalid SBOM directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory containing SBOM documents")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Failed to read SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DocumentReadError { path: PathBuf, details: String },

    #[error("Unsupported SBOM document: {path}\n\n💡 Hint: Only CycloneDX (JSON/YAML) and SPDX (JSON/YAML/tag-value) documents are supported")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse {format} document: {path}\nDetails: {details}")]
    DocumentParseError {
        path: PathBuf,
        format: String,
        details: String,
    },

    #[error("SBOM document has no creation timestamp: {path}\n\n💡 Hint: Every document needs a creation time so it can be placed on the timeline")]
    MissingTimestamp { path: PathBuf },

    #[error("Unrecognised timestamp '{value}' in {path}\n\n💡 Hint: Timestamps must be RFC 3339 (e.g. 2024-01-01T10:00:00Z) or YYYY-MM-DD")]
    TimestampParseError { path: PathBuf, value: String },

    #[error("Invalid date format pattern: '{pattern}'\n\n💡 Hint: Use strftime specifiers, for example \"%d-%b-%Y\" or \"%Y-%m-%d\"")]
    InvalidDateFormat { pattern: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    ConfigValidation { message: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
