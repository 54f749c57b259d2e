// GET /api/graph — the influence graph: authors as nodes, connections as edges.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn get_graph(State(state): State<AppState>) -> Response {
    match state.catalog.graph().await {
        Ok(graph) => Json(graph).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching graph");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
