// Worker health classification: status vocabulary, aggregate precedence,
// disabled sentinels. Ported from the console workers health card.

use crate::models::{ClassifiedStatus, HealthSummary, Severity, WorkerHealthResponse};

/// Normalized status standing in for absent or empty input.
pub const STATUS_UNKNOWN: &str = "unknown";
/// Sentinel outside the vocabulary: both workers reporting it means the
/// feature is off and the whole card is suppressed. Distinct from
/// "unavailable" (unreachable) and "unknown" (absent).
pub const STATUS_DISABLED: &str = "disabled";

const STATUS_UNAVAILABLE: &str = "unavailable";
const UNKNOWN_LABEL: &str = "Unknown";
/// Case-insensitive marker in error text meaning the health checks
/// themselves are switched off, not that a worker is failing.
const DISABLED_DEPENDENCY_MARKER: &str = "nats is disabled";

/// Lowercase and trim a reported status; absent or blank input becomes the
/// literal "unknown".
pub fn normalize_status(status: Option<&str>) -> String {
    match status.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => STATUS_UNKNOWN.into(),
    }
}

/// Fixed status vocabulary, keyed by normalized status.
fn vocabulary(key: &str) -> Option<(&'static str, Severity)> {
    match key {
        "healthy" | "ok" => Some(("Healthy", Severity::Green)),
        "running" => Some(("Running", Severity::Green)),
        "available" => Some(("Available", Severity::Green)),
        "degraded" => Some(("Degraded", Severity::Yellow)),
        "warning" => Some(("Warning", Severity::Yellow)),
        "unavailable" => Some(("Unavailable", Severity::Red)),
        "error" => Some(("Error", Severity::Red)),
        "down" => Some(("Down", Severity::Red)),
        _ => None,
    }
}

/// Resolve a raw reported status against the vocabulary. Unmapped statuses
/// keep their raw text as the label (or "Unknown" when absent/empty) with
/// blank severity, so the card still shows what the backend said.
pub fn classify(status: Option<&str>) -> ClassifiedStatus {
    let key = normalize_status(status);
    if let Some((label, severity)) = vocabulary(&key) {
        return ClassifiedStatus {
            label: label.into(),
            severity,
        };
    }
    if key != STATUS_UNKNOWN && key != STATUS_DISABLED {
        tracing::debug!(
            status = %key,
            operation = "classify",
            "status outside vocabulary; using blank severity"
        );
    }
    let label = status
        .filter(|s| !s.is_empty())
        .map_or_else(|| UNKNOWN_LABEL.into(), str::to_string);
    ClassifiedStatus {
        label,
        severity: Severity::Blank,
    }
}

/// Combine two component statuses (already normalized; `None` means the
/// whole component report was absent) into one card-level status.
///
/// Precedence, first match wins: unavailable > degraded/warning >
/// error/down > healthy. Total unreachability outranks a reported internal
/// error: an erroring worker is at least reachable and reporting.
pub fn aggregate(scheduler: Option<&str>, node: Option<&str>) -> ClassifiedStatus {
    if scheduler.is_none() && node.is_none() {
        return ClassifiedStatus {
            label: UNKNOWN_LABEL.into(),
            severity: Severity::Blank,
        };
    }
    let pair = [
        scheduler.unwrap_or(STATUS_UNKNOWN),
        node.unwrap_or(STATUS_UNKNOWN),
    ];
    let either = |key: &str| pair.contains(&key);

    if either(STATUS_UNAVAILABLE) {
        ClassifiedStatus {
            label: "Unavailable".into(),
            severity: Severity::Red,
        }
    } else if either("degraded") || either("warning") {
        ClassifiedStatus {
            label: "Degraded".into(),
            severity: Severity::Yellow,
        }
    } else if either("error") || either("down") {
        ClassifiedStatus {
            label: "Error".into(),
            severity: Severity::Red,
        }
    } else {
        ClassifiedStatus {
            label: "Healthy".into(),
            severity: Severity::Green,
        }
    }
}

/// Either raw status normalizes to "unavailable". The poll gate keys off
/// this to stop refetching an unreachable endpoint.
pub fn is_unavailable(scheduler: Option<&str>, node: Option<&str>) -> bool {
    normalize_status(scheduler) == STATUS_UNAVAILABLE
        || normalize_status(node) == STATUS_UNAVAILABLE
}

/// Both raw statuses normalize to exactly "disabled"; the caller suppresses
/// the whole card.
pub fn is_disabled_pair(scheduler: Option<&str>, node: Option<&str>) -> bool {
    normalize_status(scheduler) == STATUS_DISABLED && normalize_status(node) == STATUS_DISABLED
}

/// Any non-empty error text carries the NATS-disabled marker
/// (case-insensitive substring match).
pub fn has_disabled_dependency(errors: &[Option<&str>]) -> bool {
    errors
        .iter()
        .flatten()
        .any(|e| e.to_lowercase().contains(DISABLED_DEPENDENCY_MARKER))
}

/// "--" when no measurement is available (absent or NaN), whole milliseconds
/// otherwise.
pub fn format_response_time(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{} ms", v.round() as i64),
        _ => "--".into(),
    }
}

/// The whole card computation in one pass: per-component classification,
/// aggregate status, visibility flags, and a representative response time
/// (scheduler's measurement, falling back to the node's).
pub fn summarize(report: &WorkerHealthResponse) -> HealthSummary {
    let scheduler = report.scheduler.as_ref();
    let node = report.node.as_ref();
    let scheduler_status = scheduler.and_then(|s| s.status.as_deref());
    let node_status = node.and_then(|n| n.status.as_deref());

    let scheduler_key = normalize_status(scheduler_status);
    let node_key = normalize_status(node_status);

    HealthSummary {
        scheduler: classify(scheduler_status),
        node: classify(node_status),
        overall: aggregate(
            scheduler.map(|_| scheduler_key.as_str()),
            node.map(|_| node_key.as_str()),
        ),
        unavailable: is_unavailable(scheduler_status, node_status),
        workers_disabled: is_disabled_pair(scheduler_status, node_status),
        dependency_disabled: has_disabled_dependency(&[
            scheduler.and_then(|s| s.error.as_deref()),
            node.and_then(|n| n.error.as_deref()),
        ]),
        response_time_ms: scheduler
            .and_then(|s| s.response_time_ms)
            .or_else(|| node.and_then(|n| n.response_time_ms)),
    }
}
