//! Retrodock CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use retrodock::cli::args::Cli;
use retrodock::cli::commands::CommandDispatcher;
use retrodock::platform::InstallDirs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("retrodock=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("retrodock=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Retrodock starting with args: {:?}", cli);

    let dirs = match &cli.data_dir {
        Some(root) => InstallDirs::new(root),
        None => InstallDirs::resolve(),
    };

    if let Err(e) = dirs.create() {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    let dispatcher = CommandDispatcher::new(dirs);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
