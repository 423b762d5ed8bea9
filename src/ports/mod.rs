/// Ports module defining interfaces for hexagonal architecture
///
/// These are the driven (outbound) ports the application core uses to reach
/// the file system, the console and the output destination.
pub mod outbound;
