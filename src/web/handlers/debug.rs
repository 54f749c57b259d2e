// GET /api/debug/all — raw catalog dump with row counts, for inspection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn get_all(State(state): State<AppState>) -> Response {
    let counts = match state.catalog.counts().await {
        Ok(counts) => counts,
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching counts");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };
    let graph = match state.catalog.graph().await {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching graph");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    Json(serde_json::json!({
        "counts": counts,
        "authors": graph.nodes,
        "connections": graph.edges,
    }))
    .into_response()
}
