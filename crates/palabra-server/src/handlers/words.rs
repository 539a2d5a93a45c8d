//! CRUD handlers for the words resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use palabra_core::{Lang, NewWordPair, WordFilter, WordPair, WordPairPatch};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body accepted by create and update. Every field is optional at the
/// wire level; create enforces presence itself and update treats absent
/// fields as "keep the stored value".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBody {
    pub source_lang: Option<String>,
    pub source_text: Option<String>,
    pub target_text: Option<String>,
}

/// `GET /api/words`
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<WordPair>>, ApiError> {
    let filter = WordFilter {
        // An empty q means "no filter", same as omitting it.
        q: params.q.filter(|q| !q.is_empty()),
        limit: params.limit,
        offset: params.offset,
    };

    let words = state.store.list(&filter).await?;
    debug!(count = words.len(), "listed word pairs");
    Ok(Json(words))
}

/// `GET /api/words/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WordPair>, ApiError> {
    let id = parse_id(&id)?;
    let pair = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No word pair with id {id}")))?;
    Ok(Json(pair))
}

/// `POST /api/words`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<WordBody>,
) -> Result<Response, ApiError> {
    let (lang, source_text, target_text) = match (
        non_empty(body.source_lang),
        non_empty(body.source_text),
        non_empty(body.target_text),
    ) {
        (Some(lang), Some(source), Some(target)) => (lang, source, target),
        _ => {
            return Err(ApiError::BadRequest(
                "sourceLang, sourceText and targetText are required".to_string(),
            ))
        }
    };
    let source_lang: Lang = lang.parse()?;

    let created = state
        .store
        .create(&NewWordPair::new(source_lang, source_text, target_text))
        .await?;
    debug!(id = created.id, "created word pair");

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// `PUT /api/words/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<WordBody>,
) -> Result<Json<WordPair>, ApiError> {
    let id = parse_id(&id)?;

    let mut patch = WordPairPatch::new();
    if let Some(lang) = body.source_lang {
        patch.source_lang = Some(lang.parse::<Lang>()?);
    }
    patch.source_text = body.source_text;
    patch.target_text = body.target_text;

    let updated = state.store.update(id, &patch).await?;
    debug!(id = updated.id, "updated word pair");
    Ok(Json(updated))
}

/// `DELETE /api/words/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    debug!(id, "deleted word pair");
    Ok(Json(json!({ "ok": true })))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// A non-numeric id segment addresses nothing, so it gets the same
// response as a missing row.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("No word pair with id {raw}")))
}
