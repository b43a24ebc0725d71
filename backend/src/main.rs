//! Main entry point for the Sakhi backend.
//!
//! This file reads an optional `.env` file, initializes logging, loads
//! configuration from the environment, and hands off to the library to
//! connect the store and run the Axum server.

use std::process::ExitCode;

use sakhi_backend::config::{load_env_file, DEFAULT_LOG_FILTER, ENV_FILE};
use sakhi_backend::{start_server, Config, StartupError};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Before the subscriber, so RUST_LOG may come from the file.
    let env_file = load_env_file(ENV_FILE);

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match env_file {
        Ok(true) => info!("Loaded environment from {ENV_FILE}"),
        Ok(false) => {}
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    start_server(config).await
}
