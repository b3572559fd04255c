// Threshold alerts raised by the drift pass

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertType {
    Cpu,
    Ram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
}

/// An active breach. `(server, kind)` is the dedup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unix millis at generation; not unique when several alerts fire in the same millisecond.
    pub id: i64,
    pub server: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    /// Triggering reading, two decimals (e.g. "83.17").
    pub value: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(server: &str, kind: AlertType, reading: f64, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis(),
            server: server.to_string(),
            kind,
            value: format!("{:.2}", reading),
            severity: Severity::High,
            timestamp: at,
        }
    }

    pub fn matches(&self, server: &str, kind: AlertType) -> bool {
        self.server == server && self.kind == kind
    }
}
