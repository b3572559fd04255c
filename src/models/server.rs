// Monitored host record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host availability; serializes to lowercase JSON (e.g. "online").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
    Maintenance,
}

/// One host in the roster. `cpu`, `ram` and `disk` are percentages; `network` is throughput.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: u32,
    pub name: String,
    pub ip: String,
    pub status: ServerStatus,
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
    pub network: f64,
    /// Minutes; never touched by drift.
    pub uptime: u64,
    pub last_update: DateTime<Utc>,
}
