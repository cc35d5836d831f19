//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness response served at `/`.
#[derive(Debug, Serialize)]
pub struct ServiceStatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Readiness response served at `/api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
