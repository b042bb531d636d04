//! omnidash - Entry Point
//!
//! Command-line dashboard for the OmniAI platform backend.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use omnidash::cli::{run_command, Cli};
use omnidash::filesys::file::File;
use omnidash::logs::{init_logging, LogLevel, LogOptions};
use omnidash::storage::layout::StorageLayout;
use omnidash::storage::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let layout = StorageLayout::default();
    let settings_file = match &cli.config {
        Some(path) => File::new(path),
        None => layout.settings_file(),
    };
    let mut settings = match Settings::load(&settings_file).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(url) = &cli.backend_url {
        settings.backend.base_url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        match level.parse::<LogLevel>() {
            Ok(level) => settings.log_level = level,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // Keep the guard alive so file logs are flushed on exit
    let log_options = LogOptions {
        log_level: settings.log_level.clone(),
        json_format: settings.json_logs,
        log_dir: cli.log_dir(&settings, &layout),
        ..Default::default()
    };
    let _log_guard = match init_logging(log_options) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    debug!("Running with settings: {:?}", settings);
    match run_command(&cli, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
