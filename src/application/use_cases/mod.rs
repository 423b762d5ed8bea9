/// Use cases module containing application orchestration
mod analyze_trend;

pub use analyze_trend::AnalyzeTrendUseCase;
