// POST /api/dna/analyze — fingerprint a writing sample and rank the catalog.
//
// The response carries the query vector, the best overall match, the best
// match per era, and a top-5 debug list of runners-up. Input shorter than
// the configured floor is rejected here, before the core runs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::dna::{extract, matcher};
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

/// Analyze submitted text and return the ranked result.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let Some(text) = req.text else {
        return api_error(StatusCode::BAD_REQUEST, "Text required");
    };

    if let Err(e) = state.config.require_text(&text) {
        return api_error(StatusCode::BAD_REQUEST, &e.to_string());
    }

    let query = extract::extract(&text);

    let authors = match state.catalog.list_authors().await {
        Ok(authors) => authors,
        Err(e) => {
            tracing::error!(error = %e, "DB error listing authors");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };
    let eras = match state.catalog.list_eras().await {
        Ok(eras) => eras,
        Err(e) => {
            tracing::error!(error = %e, "DB error listing eras");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    let outcome = matcher::rank(&query, &authors, Some(&eras));
    info!(
        candidates = authors.len(),
        score = outcome.score,
        "Analyzed writing sample"
    );

    Json(outcome).into_response()
}
