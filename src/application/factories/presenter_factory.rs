use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Destination of the rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// File output when a path was given, stdout otherwise
    pub fn from_output_file(output_file: Option<PathBuf>) -> Self {
        match output_file {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the specified destination
    ///
    /// # Examples
    /// ```
    /// use sbom_trend::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output_file() {
        assert_eq!(PresenterType::from_output_file(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output_file(Some(PathBuf::from("trend.json"))),
            PresenterType::File(PathBuf::from("trend.json"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trend.json");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));

        presenter.present("{\"packages\":{}}").unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "{\"packages\":{}}"
        );
    }

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("").is_ok());
    }
}
