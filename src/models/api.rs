// Request/response bodies for the HTTP layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alert, Server};

/// GET /api/metrics body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub servers: Vec<Server>,
    pub alerts: Vec<Alert>,
}

/// GET /api/history body. Nothing ever records into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub cpu: Vec<f64>,
    pub ram: Vec<f64>,
    pub disk: Vec<f64>,
    pub network: Vec<f64>,
}

/// POST /api/receive-metrics body, as sent by push agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub server_name: String,
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
    pub network: f64,
}

/// POST /api/receive-metrics reply. `success` is true even when no server matched; see `applied`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveResponse {
    pub success: bool,
    pub message: String,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
