//! Catalog feed endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::state::AppState;

/// Serve the catalog feed as JSON.
///
/// Mirrors the feed file: the full record array on success, a 500 with a
/// generic message when the file is missing or malformed.
pub async fn products(State(state): State<AppState>) -> Response {
    match state.catalog().load().await {
        Ok(records) => Json(records).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error reading or parsing the catalog feed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error fetching product data" })),
            )
                .into_response()
        }
    }
}
