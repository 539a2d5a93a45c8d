//! Router assembly and shared request state.

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use palabra_core::WordStore;

use crate::handlers;
use crate::ui;

/// Connection facts echoed by the health endpoint.
#[derive(Debug, Clone)]
pub struct HealthInfo {
    pub dialect: String,
    pub host: String,
    pub db: String,
}

/// State shared by every handler. The store sits behind a trait object so
/// tests can swap in their own implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WordStore>,
    pub health: HealthInfo,
}

impl AppState {
    pub fn new(store: Arc<dyn WordStore>, health: HealthInfo) -> Self {
        Self { store, health }
    }
}

/// Assemble the full router: the API under `/api`, the client page at `/`,
/// CORS for the configured origins and request tracing.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/words",
            get(handlers::words::list).post(handlers::words::create),
        )
        .route(
            "/words/{id}",
            get(handlers::words::get)
                .put(handlers::words::update)
                .delete(handlers::words::delete),
        )
        .route("/translate", post(handlers::translate::translate));

    Router::new()
        .route("/", get(ui::index))
        .nest("/api", api)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in allowed_origins {
        match origin.trim().parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!(%origin, "skipping malformed allow-origin entry"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}
