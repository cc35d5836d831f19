//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceStatusResponse};
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        status: "healthy".to_string(),
        service: "URL Shortener API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns service health status with a store check.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store backend unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "URL Shortener API is running",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "memory backend, 3 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        message: if healthy {
            "URL Shortener API is running"
        } else {
            "Link store is unavailable"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the link store and reports its size.
async fn check_store(state: &AppState) -> CheckStatus {
    let backend = state.link_service.backend_name();

    if !state.link_service.health_check().await {
        return CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} backend unreachable", backend)),
        };
    }

    match state.link_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} backend, {} links", backend, count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} backend error: {}", backend, e)),
        },
    }
}
