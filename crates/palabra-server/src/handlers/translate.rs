//! Translate handler.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use palabra_core::{resolve_source_lang, Direction};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;

/// Body accepted by the translate endpoint.
#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub text: Option<String>,
    pub direction: Option<String>,
}

/// `POST /api/translate`
///
/// A recognized direction forces the source language; anything else falls
/// back to inspecting the text for Spanish markers. The lookup itself is
/// exact and case-sensitive, so a miss answers `found: false` rather than
/// an error.
pub async fn translate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TranslateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = body
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("text is required".to_string()))?;

    let direction = Direction::parse(body.direction.as_deref());
    let source_lang = resolve_source_lang(direction, &text);
    debug!(%source_lang, text = %text, "resolving translation");

    let response = match state.store.lookup(source_lang, &text).await? {
        Some(pair) => json!({ "found": true, "translation": pair.target_text }),
        None => json!({ "found": false, "translation": null }),
    };

    Ok(Json(response))
}
