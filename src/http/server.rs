//! HTTP server wiring and configuration

use super::handler::{
    compare_handler, explore_handler, home_handler, organization_handler,
    organizations_handler, search_handler, similar_handler, status_handler, HttpError,
};
use crate::catalog::Catalog;
use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Catalog JSON file (None = bundled dataset)
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Router for every API endpoint, sharing one read-only catalog
pub fn router(catalog: Arc<dyn Catalog>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/home", get(home_handler))
        .route("/api/explore", get(explore_handler))
        .route("/api/search", get(search_handler))
        .route("/api/organizations", get(organizations_handler))
        .route("/api/organizations/:id", get(organization_handler))
        .route("/api/organizations/:id/similar", get(similar_handler))
        .route("/api/compare", get(compare_handler))
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}

/// HTTP server exposing the catalog view models
pub struct HttpServer {
    config: ServerConfig,
    catalog: Arc<dyn Catalog>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, catalog: Arc<dyn Catalog>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until the process is stopped
    pub async fn start(&self) -> Result<(), HttpError> {
        let app = router(Arc::clone(&self.catalog));

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            "Serving {} organizations at http://{}",
            self.catalog.len(),
            addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}
