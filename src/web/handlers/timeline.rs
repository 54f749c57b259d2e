// GET /api/timeline — eras and historical events in chronological order.
// GET /api/timeline/era/{era_id} — works and authors for one era.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn get_timeline(State(state): State<AppState>) -> Response {
    let eras = match state.catalog.list_eras().await {
        Ok(eras) => eras,
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching eras");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };
    let events = match state.catalog.list_events().await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching events");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    Json(serde_json::json!({
        "eras": eras,
        "events": events,
    }))
    .into_response()
}

pub async fn get_era_detail(
    State(state): State<AppState>,
    Path(era_id): Path<i64>,
) -> Response {
    match state.catalog.era_detail(era_id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => {
            tracing::error!(error = %e, era_id, "DB error fetching era detail");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
