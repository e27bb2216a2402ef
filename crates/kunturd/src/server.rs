//! HTTP server for kunturd

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use kuntur_common::{CaseRepository, JsonFileStore, KunturConfig};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{docs, routes};

/// Application state shared across handlers.
///
/// The lock serializes mutations against the single in-memory collection;
/// every write completes its persistence call before the lock is released.
pub struct AppState {
    pub repo: RwLock<CaseRepository<JsonFileStore>>,
}

impl AppState {
    pub fn new(repo: CaseRepository<JsonFileStore>) -> Self {
        Self {
            repo: RwLock::new(repo),
        }
    }
}

/// Assemble the full router. Separate from `run` so tests can drive it
/// without a listener.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(docs::docs_routes())
        .merge(routes::health_routes())
        .merge(routes::case_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Permissive CORS: the web panel and the mobile client are served from
/// other origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the HTTP server
pub async fn run(config: &KunturConfig, state: AppState) -> Result<()> {
    let app = app(Arc::new(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
