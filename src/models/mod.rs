// Wire models for the monitoring API (camelCase JSON)

mod alert;
mod api;
mod server;

pub use alert::{Alert, AlertType, Severity};
pub use api::{HealthResponse, History, MetricsSnapshot, MetricsUpdate, ReceiveResponse};
pub use server::{Server, ServerStatus};
