use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Track how package versions and licenses change across a directory of SBOMs
#[derive(Parser, Debug)]
#[command(name = "sbom-trend")]
#[command(version)]
#[command(
    about = "Track how package versions and licenses change across a directory of SBOMs",
    long_about = None
)]
pub struct Args {
    /// Directory containing the SBOM snapshots, processed in file name order
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Only analyse the package with this exact (case-sensitive) name
    #[arg(short, long, value_name = "NAME")]
    pub module: Option<String>,

    /// Do not track package licenses
    #[arg(long)]
    pub exclude_license: bool,

    /// strftime pattern used to render snapshot timestamps [default: %d-%b-%Y]
    #[arg(long, value_name = "PATTERN")]
    pub date_format: Option<String>,

    /// Output format: json or text [default: json with --output-file, text otherwise]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Print the effective settings and per-snapshot statistics
    #[arg(long)]
    pub debug: bool,

    /// Path to a configuration file (defaults to ./.sbom-trend.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments; `--help`/`--version` also come back as `Err`
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
