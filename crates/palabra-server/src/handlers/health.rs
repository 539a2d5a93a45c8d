//! Health endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::app::AppState;

/// `GET /api/health`
///
/// Pings the datastore and reports the connection facts. A failed ping is
/// reported in the body rather than hidden behind a generic error page, so
/// an operator can see at a glance which database the server can't reach.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => Json(json!({
            "ok": true,
            "dialect": state.health.dialect,
            "host": state.health.host,
            "db": state.health.db,
        }))
        .into_response(),
        Err(err) => {
            error!(%err, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
