// Worker health report models

use serde::{Deserialize, Serialize};

use super::DecodeError;
use super::coerce::lenient_f64;

/// Health report for one worker component (scheduler or node).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerHealthStatus {
    /// Free-text status as reported by the backend (e.g. "healthy", "down").
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text error detail, if the component reported one.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub response_time_ms: Option<f64>,
}

/// The workers health endpoint payload. Either component may be absent
/// entirely, which is distinct from a component reporting an unknown status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerHealthResponse {
    #[serde(default)]
    pub scheduler: Option<WorkerHealthStatus>,
    #[serde(default)]
    pub node: Option<WorkerHealthStatus>,
}

impl WorkerHealthResponse {
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Visual urgency level for status indicators; serializes lowercase to match
/// the console badge variants. `Blue` is part of the badge set but unmapped
/// by the status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Red,
    Blue,
    Blank,
}

/// A status resolved to a human label and a severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedStatus {
    pub label: String,
    pub severity: Severity,
}

/// Everything the workers health card renders, computed in one pass from a
/// `WorkerHealthResponse`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub scheduler: ClassifiedStatus,
    pub node: ClassifiedStatus,
    pub overall: ClassifiedStatus,
    /// Either component is unreachable; feeds the poll gate.
    pub unavailable: bool,
    /// Both components report "disabled"; the caller hides the whole card.
    pub workers_disabled: bool,
    /// Health checks themselves are switched off (NATS disabled), which is
    /// not a worker failure.
    pub dependency_disabled: bool,
    /// Scheduler response time, falling back to the node's.
    pub response_time_ms: Option<f64>,
}
