//! HTTP proxy for the inspiration search
//!
//! Serves `GET /api/pinterest/search?q=<text>&bookmark=<token>` so a browser
//! front end can search without ever seeing the access token.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::client::PinterestClient;
use super::error::SearchError;
use super::types::SearchResults;

pub const SEARCH_ROUTE: &str = "/api/pinterest/search";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 3000)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    bookmark: Option<String>,
}

async fn search_pins(
    State(client): State<Arc<PinterestClient>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, SearchError> {
    let query = params.q.unwrap_or_default();
    let results = client.search(&query, params.bookmark.as_deref()).await?;
    Ok(Json(results))
}

/// Routes with tracing and permissive CORS
pub fn router(client: Arc<PinterestClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(SEARCH_ROUTE, get(search_pins))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(client)
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(
    listener: TcpListener,
    client: Arc<PinterestClient>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn run(config: ServerConfig, client: Arc<PinterestClient>) -> anyhow::Result<()> {
    let address = config.socket_addr();
    if !client.is_configured() {
        warn!("No Pinterest access token set yet; searches return placeholder pins until one is");
    }

    let listener = TcpListener::bind(&address).await?;
    let local: SocketAddr = listener.local_addr()?;
    info!(%local, "Inspiration proxy listening on http://{}{}", local, SEARCH_ROUTE);

    serve_on(listener, client, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
