//! TeleWebManager API - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use telewebmanager_api::{
    cli::{Cli, Commands},
    commands,
    config::{Config, LOG_FILE_NAME},
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so LOG_DIR can take effect
    let config = Config::from_env();
    let log_dir = config.as_ref().ok().and_then(|c| c.log_dir.clone());

    // Initialize tracing (verbose mode sets debug level)
    if let Err(e) = init_tracing(cli.verbose, log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = ?e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(error = ?e, "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
///
/// Logs go to stdout, and additionally to `<log_dir>/backend.log` when a
/// log directory is configured.
fn init_tracing(verbose: bool, log_dir: Option<&Path>) -> std::io::Result<()> {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE_NAME))?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(file_layer)
        .with(EnvFilter::new(filter))
        .init();

    Ok(())
}
