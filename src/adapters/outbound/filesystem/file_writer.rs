use crate::ports::outbound::OutputPresenter;
use crate::shared::error::TrendError;
use crate::shared::security::ensure_not_symlink_if_present;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the rendered report to `output_path`, replacing any previous report.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> TrendError {
        TrendError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// The destination must sit in an existing directory and must not be a symlink
    fn check_destination(&self) -> Result<()> {
        let parent = self
            .output_path
            .parent()
            .filter(|parent| *parent != Path::new(""));
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }

        ensure_not_symlink_if_present(&self.output_path, "writing")
            .map_err(|violation| self.write_error(violation.to_string()))?;
        Ok(())
    }

    fn write_report(&self, content: &str) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.output_path)?);
        out.write_all(content.as_bytes())?;
        out.flush()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_destination()?;
        self.write_report(content)
            .map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// Prints the rendered report on stdout
#[derive(Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("trend.json");

        FileSystemWriter::new(output_path.clone())
            .present("{\"packages\": {}}")
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "{\"packages\": {}}"
        );
    }

    #[test]
    fn test_previous_report_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("trend.json");
        fs::write(&output_path, "previous run with a much longer body").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("{}")
            .unwrap();
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "{}");
    }

    #[test]
    fn test_missing_parent_directory() {
        let err = FileSystemWriter::new(PathBuf::from("/nonexistent/reports/trend.json"))
            .present("{}")
            .unwrap_err();

        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[test]
    fn test_parent_that_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("history.json");
        fs::write(&not_a_dir, "{}").unwrap();

        let err = FileSystemWriter::new(not_a_dir.join("trend.json"))
            .present("{}")
            .unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_destination_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "keep").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("{}").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_accepts_empty_report() {
        assert!(StdoutPresenter::new().present("").is_ok());
    }
}
