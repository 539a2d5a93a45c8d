//! HTTP error envelope.
//!
//! Every failed API call produces a status code and an `{"error": message}`
//! body, no matter where the failure started. Handlers return `ApiError`
//! and let `IntoResponse` do the shaping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use palabra_core::PalabraError;

/// Failure modes an API call can surface.
#[derive(Debug)]
pub enum ApiError {
    /// The request was malformed or violated a constraint (400)
    BadRequest(String),
    /// The addressed row does not exist (404)
    NotFound(String),
    /// The datastore could not be reached (500)
    Unavailable(String),
    /// Anything else that should never happen (500)
    Internal(String),
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unavailable(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<PalabraError> for ApiError {
    fn from(err: PalabraError) -> Self {
        match err {
            PalabraError::Validation(msg) | PalabraError::Conflict(msg) => {
                ApiError::BadRequest(msg)
            }
            PalabraError::NotFound(msg) => ApiError::NotFound(msg),
            PalabraError::Unavailable(msg) => ApiError::Unavailable(msg),
            PalabraError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
