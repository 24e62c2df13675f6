//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe used by Unraid, Kubernetes, and load balancers
//! to decide whether to keep routing traffic to this instance. Served at
//! both `/health` and `/healthz`.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process can respond at all.
    pub status: &'static str,
    /// Current wall-clock time, ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
}

/// Health check handler.
///
/// Reports only values intrinsic to the running process, so it has no
/// failure modes.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime_seconds(),
    })
}
