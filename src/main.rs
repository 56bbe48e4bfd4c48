use mcthelper::catalog::Catalog;
use mcthelper::cli::{self, Cli};
use mcthelper::config::{Config, DEFAULT_LOG_FILTER};

use clap::{CommandFactory, Parser};
use std::io;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load environment from .env file if present
    let dotenv = dotenvy::dotenv();

    let config = Config::from_env();
    let _guard = init_logging(&config);

    if let Err(e) = dotenv {
        debug!("No .env file found or error loading it: {}", e);
    }

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::new();
            let report = catalog.load_file(path)?;
            info!(
                "Catalog ready: {} records loaded, {} rejected",
                report.loaded, report.rejected
            );
            catalog
        }
        None => Catalog::with_sample_data()?,
    };

    let stdout = io::stdout();
    cli::run(&command, &catalog, &mut stdout.lock())?;

    Ok(())
}

/// Console logging on stderr, plus daily-rotated JSON files when LOG_DIR is set
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => match std::fs::create_dir_all(log_dir) {
            Ok(()) => {
                let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "mcthelper.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .json()
                    .with_writer(non_blocking);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Could not create log directory {}: {}", log_dir.display(), e);
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(file_layer)
        .init();

    if let Some(log_dir) = &config.log_dir {
        debug!("Logging initialized - log directory: {}", log_dir.display());
    }

    guard
}
