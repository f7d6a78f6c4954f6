//! Biblion - Library Catalog Manager
//!
//! An interactive, single-threaded catalog session over stdin/stdout.

use std::io;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblion::{catalog::Catalog, config::AppConfig, records, shell::Shell};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblion={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Biblion v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = Catalog::new();

    // One-shot catalog load; a bad file leaves the catalog empty but
    // never takes the session down.
    if let Some(path) = &config.catalog.data_file {
        match records::load_catalog_file(Path::new(path)) {
            Ok(loaded) => {
                catalog.load_records(loaded);
                tracing::info!("Loaded {} items from {}", catalog.len(), path);
            }
            Err(err) => {
                tracing::error!("Failed to load catalog file {}: {}", path, err);
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog);
    shell.run(stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        "Session ended with {} items and {} active loans",
        shell.catalog().len(),
        shell.catalog().active_loans()
    );
    Ok(())
}
