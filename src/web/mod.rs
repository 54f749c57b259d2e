// Web server — Axum JSON API over the matching core and catalog.
//
// All routes serve JSON. There is no auth: the API is read-only aside from
// the analyze endpoint, which is stateless, and the frontend is served
// separately (CORS origin comes from FRONTEND_URL).

use std::sync::Arc;

use anyhow::Result;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::traits::AuthorCatalog;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn AuthorCatalog>,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    catalog: Arc<dyn AuthorCatalog>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        catalog,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Quill API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router. Public so integration tests can drive it
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health))
        .route("/api/dna/analyze", post(handlers::analyze::analyze))
        .route("/api/timeline", get(handlers::timeline::get_timeline))
        .route(
            "/api/timeline/era/{era_id}",
            get(handlers::timeline::get_era_detail),
        )
        .route("/api/graph", get(handlers::graph::get_graph))
        .route("/api/debug/all", get(handlers::debug::get_all))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy: a single configured origin, or all origins when unset.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.frontend_url.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!(
                origin = %config.frontend_url,
                "FRONTEND_URL is not a valid origin — allowing all origins"
            );
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// GET /health — liveness check.
async fn health() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// Build a JSON error response with a consistent shape.
pub(crate) fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
