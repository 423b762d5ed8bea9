/// Filesystem adapters for file I/O operations
mod directory_source;
mod file_writer;

pub use directory_source::DirectorySnapshotSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
