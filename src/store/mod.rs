// In-memory metrics store: simulated drift, threshold alerts, raw pushes

mod drift;
mod shared;

pub use drift::{CPU_DRIFT, DISK_DRIFT, Drift, NETWORK_DRIFT, RAM_DRIFT};
pub use shared::SharedStore;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::models::{Alert, AlertType, History, MetricsSnapshot, MetricsUpdate, Server};

/// CPU alert fires strictly above this percentage.
pub const CPU_ALERT_THRESHOLD: f64 = 80.0;
/// RAM alert fires strictly above this percentage.
pub const RAM_ALERT_THRESHOLD: f64 = 85.0;
/// Alerts kept after each drift pass (most recent first to survive).
pub const ALERT_RETENTION: usize = 10;

/// Result of a push by server name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(self) -> bool {
        self == UpdateOutcome::Applied
    }
}

/// Owns the roster and the active alert list. Not synchronized; wrap in [`SharedStore`] to share.
pub struct MetricsStore {
    servers: Vec<Server>,
    alerts: Vec<Alert>,
    history: History,
    rng: StdRng,
}

impl MetricsStore {
    pub fn new(servers: Vec<Server>) -> Self {
        Self::with_rng(servers, StdRng::from_os_rng())
    }

    /// Store driven by the given generator (seed it for reproducible drift).
    pub fn with_rng(servers: Vec<Server>, rng: StdRng) -> Self {
        Self {
            servers,
            alerts: Vec::new(),
            history: History::default(),
            rng,
        }
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Drifts every server, raises new alerts, trims the alert list and returns the result.
    #[instrument(skip(self), fields(store = "metrics", operation = "advance_and_snapshot"))]
    pub fn advance_and_snapshot(&mut self) -> MetricsSnapshot {
        let now = Utc::now();
        for server in self.servers.iter_mut() {
            server.cpu = CPU_DRIFT.step(server.cpu, self.rng.random());
            server.ram = RAM_DRIFT.step(server.ram, self.rng.random());
            server.disk = DISK_DRIFT.step(server.disk, self.rng.random());
            server.network = NETWORK_DRIFT.step(server.network, self.rng.random());
            server.last_update = now;

            if server.cpu > CPU_ALERT_THRESHOLD {
                raise_alert(&mut self.alerts, server, AlertType::Cpu, server.cpu, now);
            }
            if server.ram > RAM_ALERT_THRESHOLD {
                raise_alert(&mut self.alerts, server, AlertType::Ram, server.ram, now);
            }
        }

        if self.alerts.len() > ALERT_RETENTION {
            let excess = self.alerts.len() - ALERT_RETENTION;
            self.alerts.drain(..excess);
        }

        MetricsSnapshot {
            servers: self.servers.clone(),
            alerts: self.alerts.clone(),
        }
    }

    /// Writes the pushed readings verbatim (no clamping, no alert evaluation).
    #[instrument(skip(self, update), fields(store = "metrics", operation = "apply_external_update", server = %update.server_name))]
    pub fn apply_external_update(&mut self, update: &MetricsUpdate) -> UpdateOutcome {
        let Some(server) = self
            .servers
            .iter_mut()
            .find(|s| s.name == update.server_name)
        else {
            tracing::warn!("push for unknown server ignored");
            return UpdateOutcome::NotFound;
        };
        server.cpu = update.cpu;
        server.ram = update.ram;
        server.disk = update.disk;
        server.network = update.network;
        server.last_update = Utc::now();
        tracing::debug!(
            cpu = update.cpu,
            ram = update.ram,
            disk = update.disk,
            network = update.network,
            "metrics pushed"
        );
        UpdateOutcome::Applied
    }

    pub fn snapshot_history(&self) -> History {
        self.history.clone()
    }
}

fn raise_alert(
    alerts: &mut Vec<Alert>,
    server: &Server,
    kind: AlertType,
    reading: f64,
    at: DateTime<Utc>,
) {
    if alerts.iter().any(|a| a.matches(&server.name, kind)) {
        return;
    }
    let alert = Alert::new(&server.name, kind, reading, at);
    tracing::info!(server = %alert.server, kind = ?kind, value = %alert.value, "alert raised");
    alerts.push(alert);
}
