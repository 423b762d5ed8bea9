//! sbom-trend - version and license trends across SBOM snapshots
//!
//! This library folds an ordered series of SBOM documents (CycloneDX or
//! SPDX) into per-package ledgers: how often each package appears, which
//! versions it went through and when, and which licenses it carried. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`trend_analysis`): Snapshot model and the trend engine
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_trend::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzeTrendUseCase::new(
//!     DirectorySnapshotSource::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = TrendRequest::builder().directory("sboms").build();
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod trend_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectorySnapshotSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{OutputFormat, TrendRequest, TrendResponse};
    pub use crate::application::use_cases::AnalyzeTrendUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SnapshotSource, TrendFormatter,
    };
    pub use crate::shared::Result;
    pub use crate::trend_analysis::domain::{
        GlobalSnapshotStats, PackageLedgerEntry, PackageRecord, Snapshot, TrendOptions,
        TrendReport, MISSING_VERSION, NO_LICENSE,
    };
    pub use crate::trend_analysis::services::{DateFormat, TrendEngine};
}
