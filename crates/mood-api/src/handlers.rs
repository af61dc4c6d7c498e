//! HTTP request handlers for the mood service.
//!
//! Implements mood analysis and health check endpoints using axum.

use crate::service::{MoodService, ServiceError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use mood_domain::MoodResult;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Mood pipeline with its loaded sentiment source
    pub service: MoodService,
}

/// Mood analysis request
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    /// Text to classify; absent is treated like empty
    #[serde(default)]
    pub text: Option<String>,
}

/// Mood analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct MoodResponse {
    /// Text exactly as submitted
    pub text: String,
    /// Mood label, e.g. "very happy"
    pub mood: String,
    /// Confidence in [0.5, 1.0]
    pub confidence: f64,
}

impl From<MoodResult> for MoodResponse {
    fn from(result: MoodResult) -> Self {
        MoodResponse {
            text: result.text,
            mood: result.mood.as_str().to_string(),
            confidence: result.confidence,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process is serving
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Mood pipeline error
    Service(ServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Service(ServiceError::InvalidInput(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Service(e @ ServiceError::CollaboratorFailure(_)) => {
                error!("Mood analysis failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

/// POST /api/mood - Classify the mood of a text
async fn analyze_mood(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Result<Json<MoodResponse>, AppError> {
    let result = state.service.analyze(request.text.as_deref())?;
    Ok(Json(result.into()))
}

/// GET /api/health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/mood", post(analyze_mood))
        .route("/api/health", get(health_check))
        .with_state(state)
}
