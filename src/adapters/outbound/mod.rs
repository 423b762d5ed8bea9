/// Outbound adapters for filesystem, SBOM parsing, formatting and console output
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod sbom_parsers;
