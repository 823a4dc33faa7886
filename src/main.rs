//! Mock Robotic Vacuum API
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────┐
//!     ────────────────────────┼─▶ net ──▶ http server ──▶ dispatcher     │
//!                             │  listener   (axum)          │            │
//!                             │                             ▼            │
//!     Client Response         │                        route table       │
//!     ◀───────────────────────┼──── canned status + body ◀──┘            │
//!                             │                             │            │
//!                             │                             ▼            │
//!                             │                  event sink / metrics    │
//!                             └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use vacuum_mock::config::{load_config, MockConfig};
use vacuum_mock::lifecycle::{start, Shutdown, StartupError};
use vacuum_mock::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "vacuum-mock")]
#[command(about = "Mock HTTP API for a robotic vacuum", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MockConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);
    tracing::info!("vacuum-mock v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    match start(&config, shutdown.subscribe()).await {
        Ok(()) => tracing::info!("Shutdown complete"),
        // Reported once; the process ends without serving.
        Err(StartupError::Listener(e)) => tracing::error!("Error starting server: {}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
