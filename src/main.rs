use anyhow::Context;
use clap::Parser;
use efficacy::{Catalog, HttpServer, InMemoryCatalog, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Serve the catalog view models as a JSON API
#[derive(Parser, Debug)]
#[command(name = "efficacy", version, about)]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1", env = "EFFICACY_ADDRESS")]
    address: String,

    /// Port
    #[arg(long, default_value_t = 8080, env = "EFFICACY_PORT")]
    port: u16,

    /// Catalog JSON file (defaults to the bundled dataset)
    #[arg(long, env = "EFFICACY_CATALOG")]
    catalog: Option<PathBuf>,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            address: args.address,
            port: args.port,
            catalog_path: args.catalog,
        }
    }
}

fn load_catalog(config: &ServerConfig) -> anyhow::Result<InMemoryCatalog> {
    match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => InMemoryCatalog::bundled().context("failed to load bundled catalog"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from(Args::parse());
    info!("Efficacy v{}", efficacy::version());

    let catalog = load_catalog(&config)?;
    if catalog.is_empty() {
        info!("Catalog is empty; every view will show its empty state");
    }

    let server = HttpServer::new(config, Arc::new(catalog));
    server.start().await?;

    Ok(())
}
