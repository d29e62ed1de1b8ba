//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use advisor_core::{AdvisorError, ask};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub completion: String,
    pub request_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, err: &AdvisorError, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        provider: state.provider.name().into(),
    })
}

/// Same-origin proxy for the advice query
pub async fn advice_handler(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    match ask(state.provider.as_ref(), &payload.query).await {
        Ok(completion) => Ok(Json(AdviceResponse {
            completion,
            request_id,
        })),
        Err(e @ AdvisorError::EmptyQuery) => {
            Err(api_error(StatusCode::BAD_REQUEST, &e, "EMPTY_QUERY"))
        }
        Err(e) => {
            tracing::error!(%request_id, "Advice request failed: {}", e);
            Err(api_error(StatusCode::BAD_GATEWAY, &e, "UPSTREAM_ERROR"))
        }
    }
}
