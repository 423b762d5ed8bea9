/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the trend domain isolated.
mod output_format;
mod trend_request;
mod trend_response;

pub use output_format::OutputFormat;
pub use trend_request::{TrendRequest, TrendRequestBuilder};
pub use trend_response::TrendResponse;
