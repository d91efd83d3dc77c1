// Dashboard input and output models

mod coerce;
mod derived;
mod health;
mod snapshot;

use thiserror::Error;

pub use derived::{CpuMetrics, DerivedMetrics, TrafficMetrics, UsageMetrics, UserMetrics};
pub use health::{
    ClassifiedStatus, HealthSummary, Severity, WorkerHealthResponse, WorkerHealthStatus,
};
pub use snapshot::SystemStatsSnapshot;

/// Decode failure for a backend API payload. Only structurally invalid JSON
/// produces this; malformed numeric fields inside a valid payload resolve
/// leniently to `None` instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
