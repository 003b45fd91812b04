//! HTTP API gateway for Mentora.
//!
//! Exposes the tutoring operations over REST:
//!
//! - `POST /lesson-step` — one structured teaching step
//! - `POST /practice`    — a set of tagged practice questions
//! - `GET  /health`      — liveness plus provider configuration status
//!
//! Built on Axum. Degraded generation and marker-less model output never
//! reach the error path; only unexpected internal faults produce a 500.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use mentora_tutor::{
    LessonStepRequest, LessonStepResponse, PracticeRequest, PracticeResponse, SessionStore, Tutor,
};

/// Shared application state for the gateway.
pub struct AppState {
    pub tutor: Tutor,
}

type SharedState = Arc<AppState>;

/// Build the Axum router with all gateway routes.
///
/// CORS is wide open: the service is a backend for browser frontends on
/// arbitrary origins and carries no credentials of its own.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/lesson-step", post(lesson_step_handler))
        .route("/practice", post(practice_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the shared state from configuration.
pub fn build_state(config: &mentora_config::AppConfig) -> SharedState {
    let provider = mentora_providers::build_from_config(config);
    let store = Arc::new(SessionStore::new());
    let tutor = Tutor::new(
        provider,
        store,
        &config.model,
        config.temperature,
        config.max_tokens,
    );
    Arc::new(AppState { tutor })
}

/// Start the gateway HTTP server.
pub async fn start(config: mentora_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = build_state(&config);

    if !state.tutor.provider_configured() {
        info!("No API key configured — serving offline fallback responses");
    }

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: mentora_core::Error) -> HandlerError {
    error!(error = %e, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

async fn lesson_step_handler(
    State(state): State<SharedState>,
    Json(payload): Json<LessonStepRequest>,
) -> Result<Json<LessonStepResponse>, HandlerError> {
    let response = state
        .tutor
        .lesson_step(payload)
        .await
        .map_err(internal_error)?;
    Ok(Json(response))
}

async fn practice_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PracticeRequest>,
) -> Result<Json<PracticeResponse>, HandlerError> {
    let response = state.tutor.practice(payload).await.map_err(internal_error)?;
    Ok(Json(response))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    provider_configured: bool,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider_configured: state.tutor.provider_configured(),
    })
}
