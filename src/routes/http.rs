// JSON handlers: version, metrics, history, receive-metrics, health

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use chrono::Utc;

use super::AppState;
use crate::error::ApiError;
use crate::models::{HealthResponse, History, MetricsSnapshot, MetricsUpdate, ReceiveResponse};
use crate::version::{NAME, VERSION};

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/metrics — one drift-and-alert pass, then the full roster and alert list.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let snapshot = state.store.advance_and_snapshot();
    tracing::debug!(
        servers = snapshot.servers.len(),
        alerts = snapshot.alerts.len(),
        "metrics polled"
    );
    Json(snapshot)
}

pub(super) async fn history_handler(State(state): State<AppState>) -> Json<History> {
    Json(state.store.snapshot_history())
}

/// POST /api/receive-metrics — raw overwrite by server name.
/// Replies `success: true` whether or not the name matched; `applied` tells the two apart.
pub(super) async fn receive_metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsUpdate>, JsonRejection>,
) -> Result<Json<ReceiveResponse>, ApiError> {
    let Json(update) = payload?;
    let outcome = state.store.apply_external_update(&update);
    Ok(Json(ReceiveResponse {
        success: true,
        message: "Metrics received".into(),
        applied: outcome.is_applied(),
    }))
}

pub(super) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: Utc::now(),
    })
}
