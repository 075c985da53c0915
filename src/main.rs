//! Address Book - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout, backed by the
//! configured address book file.

use address_book::{run_session, Config, JsonFileStore};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    // Initialize logging (stderr only, stdout carries the conversation)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = JsonFileStore::new(&config.storage_path);
    info!(
        "Starting assistant with address book at {}",
        store.path().display()
    );

    let stdin = io::stdin();
    if let Err(e) = run_session(
        &store,
        config.birthday_window_days,
        stdin.lock(),
        io::stdout(),
    ) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Address book saved, shutting down");
    Ok(())
}
