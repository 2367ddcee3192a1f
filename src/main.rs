use anyhow::Result;
use clap::Parser;

use niri_windows::cli::{Cli, run};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries the result list for the launcher.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("niri_windows=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}
