use owo_colors::OwoColorize;
use sbom_trend::adapters::outbound::console::StderrProgressReporter;
use sbom_trend::adapters::outbound::filesystem::DirectorySnapshotSource;
use sbom_trend::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_trend::application::use_cases::AnalyzeTrendUseCase;
use sbom_trend::cli::Args;
use sbom_trend::config::{
    discover_config, load_config_from_path, ConfigFile, Settings, CONFIG_FILENAME,
};
use sbom_trend::shared::error::{ExitCode, TrendError};
use sbom_trend::shared::security::ensure_not_symlink;
use sbom_trend::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(argument_exit_code(&e).as_i32());
        }
    };

    let code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(code.as_i32());
}

/// Help and version output are not failures
fn argument_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;

    if settings.debug {
        for line in settings.describe() {
            eprintln!("{} {}", "🐛".dimmed(), line);
        }
    }

    validate_directory(&settings.directory)?;

    // Create adapters (Dependency Injection)
    let use_case =
        AnalyzeTrendUseCase::new(DirectorySnapshotSource::new(), StderrProgressReporter::new());
    let response = use_case.execute(settings.to_request())?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.debug);
    let formatted_output = formatter.format(&response.report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output_file(
        settings.output_file.clone(),
    ));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` path, else `.sbom-trend.yml` in the working directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("⚙️  Loaded config from: {}", path.display());
            Ok(Some(config))
        }
        None => {
            let config = discover_config(Path::new("."))?;
            if config.is_some() {
                eprintln!("⚙️  Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            Ok(config)
        }
    }
}

fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TrendError::DirectoryNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let metadata =
        ensure_not_symlink(path, "scanning").map_err(|violation| TrendError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: violation.to_string(),
        })?;
    if !metadata.is_dir() {
        return Err(TrendError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
