//! CLI command implementations

use std::sync::Arc;

use tracing::info;

use crate::catalog::sample_products;
use crate::http_server::HttpServer;
use crate::rest_api::{ApiKeyGate, ProductHandler};
use crate::store::{JsonFileStore, MemoryStore, ProductStore, StorageBackendKind};

use super::args::{Cli, Command};
use super::config::{Config, StorageConfig};
use super::errors::{CliError, CliResult};

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => {
            let mut config = Config::resolve(config.as_deref())?;
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)
        }
        Command::Init { config, force } => {
            let config = Config::resolve(config.as_deref())?;
            init(&config.storage, force)
        }
    }
}

/// Build the configured store
pub fn build_store(storage: &StorageConfig) -> Arc<dyn ProductStore> {
    match storage.backend {
        StorageBackendKind::Memory if storage.seed_sample_data => {
            Arc::new(MemoryStore::with_products(sample_products()))
        }
        StorageBackendKind::Memory => Arc::new(MemoryStore::new()),
        StorageBackendKind::File => Arc::new(JsonFileStore::new(storage.data_file.clone())),
    }
}

/// Run the HTTP API until Ctrl-C
pub fn serve(config: Config) -> CliResult<()> {
    init_tracing();

    info!(
        backend = %config.storage.backend,
        data_file = %config.storage.data_file.display(),
        default_limit = config.pagination.default_limit,
        "starting product catalog"
    );

    let store = build_store(&config.storage);
    let handler =
        ProductHandler::new(store).with_default_limit(config.pagination.default_limit);
    let server = HttpServer::new(config.server, handler, ApiKeyGate::new(&config.api_key));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write the sample catalog to the data file
pub fn init(storage: &StorageConfig, force: bool) -> CliResult<()> {
    let path = storage.data_file.as_path();
    if path.exists() && !force {
        return Err(CliError::already_initialized(path.display()));
    }

    let store = JsonFileStore::new(path);
    let products = sample_products();
    store.save(&products)?;

    println!("Wrote {} products to {}", products.len(), path.display());
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init();
}
