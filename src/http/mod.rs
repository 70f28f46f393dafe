//! HTTP surface of the counter service.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | `{"counter": n}`, no mutation |
//! | `POST /` | `{"counter": n}` after a locked increment |
//! | `GET /version` | `{"version": "<APP_VERSION>"}` |
//! | `GET /healthz` | `{"status": "ok"}`, never touches the counter file |
//!
//! Store and lock calls block, so handlers run them on tokio's blocking pool.
//! Errors become `{"error": "..."}` with a 5xx status; one failed request
//! never takes the process down.

mod server;


pub use server::serve;

use crate::config::Config;
use crate::counter;
use crate::error::{CounterError, Result};
use crate::events;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState(Arc<Config>);

impl AppState {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.0
    }
}

#[derive(Debug, Serialize)]
struct CounterBody {
    counter: u64,
}

/// Request-level failure, rendered as a JSON error body.
struct ApiError(CounterError);

impl From<CounterError> for ApiError {
    fn from(err: CounterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        events::request_failed(&self.0);
        (
            self.0.status_code(),
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Build the router serving the counter endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_get_counter).post(handle_increment))
        .route("/version", get(handle_version))
        .route("/healthz", get(handle_health))
        .fallback(handler_404)
        .with_state(state)
}

/// Run a blocking filesystem operation off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CounterError::Task(e.to_string()))?
}

async fn handle_get_counter(
    State(state): State<AppState>,
) -> std::result::Result<Json<CounterBody>, ApiError> {
    let path = state.config().counter_file.clone();
    let counter = run_blocking(move || Ok(counter::current(&path))).await?;
    Ok(Json(CounterBody { counter }))
}

async fn handle_increment(
    State(state): State<AppState>,
) -> std::result::Result<Json<CounterBody>, ApiError> {
    let path = state.config().counter_file.clone();
    let counter = run_blocking(move || counter::increment(&path)).await?;
    Ok(Json(CounterBody { counter }))
}

async fn handle_version(State(state): State<AppState>) -> Response {
    Json(json!({ "version": state.config().app_version })).into_response()
}

async fn handle_health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
