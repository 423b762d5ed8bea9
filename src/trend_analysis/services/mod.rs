mod date_format;
mod report_assembler;
mod timestamp_parser;
mod trend_engine;

pub use date_format::{DateFormat, DEFAULT_DATE_FORMAT};
pub use report_assembler::ReportAssembler;
pub use timestamp_parser::TimestampParser;
pub use trend_engine::{TrendEngine, TrendLedger};
