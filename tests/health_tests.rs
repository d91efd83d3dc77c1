// Workers health classification through the public API

use dashboard_core::health;
use dashboard_core::models::{Severity, WorkerHealthResponse, WorkerHealthStatus};

fn status(s: &str) -> Option<WorkerHealthStatus> {
    Some(WorkerHealthStatus {
        status: Some(s.into()),
        error: None,
        response_time_ms: None,
    })
}

#[test]
fn test_summarize_healthy_report() {
    let report = WorkerHealthResponse {
        scheduler: Some(WorkerHealthStatus {
            status: Some("healthy".into()),
            error: None,
            response_time_ms: Some(12.0),
        }),
        node: Some(WorkerHealthStatus {
            status: Some("running".into()),
            error: None,
            response_time_ms: Some(48.0),
        }),
    };
    let summary = health::summarize(&report);
    assert_eq!(summary.scheduler.label, "Healthy");
    assert_eq!(summary.scheduler.severity, Severity::Green);
    assert_eq!(summary.node.label, "Running");
    assert_eq!(summary.overall.label, "Healthy");
    assert_eq!(summary.overall.severity, Severity::Green);
    assert!(!summary.unavailable);
    assert!(!summary.workers_disabled);
    assert!(!summary.dependency_disabled);
    assert_eq!(summary.response_time_ms, Some(12.0));
}

#[test]
fn test_summarize_empty_report_is_unknown() {
    let summary = health::summarize(&WorkerHealthResponse::default());
    assert_eq!(summary.overall.label, "Unknown");
    assert_eq!(summary.overall.severity, Severity::Blank);
    assert_eq!(summary.scheduler.label, "Unknown");
    assert_eq!(summary.node.label, "Unknown");
    assert_eq!(summary.response_time_ms, None);
}

#[test]
fn test_summarize_unavailable_sets_flag_and_overall() {
    let report = WorkerHealthResponse {
        scheduler: status("unavailable"),
        node: status("ok"),
    };
    let summary = health::summarize(&report);
    assert!(summary.unavailable);
    assert_eq!(summary.overall.label, "Unavailable");
    assert_eq!(summary.overall.severity, Severity::Red);
}

#[test]
fn test_summarize_disabled_pair_suppresses_card() {
    let report = WorkerHealthResponse {
        scheduler: status("disabled"),
        node: status("disabled"),
    };
    let summary = health::summarize(&report);
    assert!(summary.workers_disabled);
    // disabled is a sentinel, not a vocabulary entry
    assert_eq!(summary.scheduler.severity, Severity::Blank);
    assert_eq!(summary.scheduler.label, "disabled");
}

#[test]
fn test_summarize_nats_disabled_dependency() {
    let report = WorkerHealthResponse {
        scheduler: Some(WorkerHealthStatus {
            status: Some("unavailable".into()),
            error: Some("NATS is disabled for this cluster".into()),
            response_time_ms: None,
        }),
        node: None,
    };
    let summary = health::summarize(&report);
    assert!(summary.dependency_disabled);
    assert!(summary.unavailable);
}

#[test]
fn test_summarize_response_time_falls_back_to_node() {
    let report = WorkerHealthResponse {
        scheduler: Some(WorkerHealthStatus {
            status: Some("ok".into()),
            error: None,
            response_time_ms: None,
        }),
        node: Some(WorkerHealthStatus {
            status: Some("ok".into()),
            error: None,
            response_time_ms: Some(77.0),
        }),
    };
    assert_eq!(health::summarize(&report).response_time_ms, Some(77.0));
}

#[test]
fn test_aggregate_precedence_from_raw_reports() {
    // scheduler degraded + node down resolves Degraded, not Error
    let report = WorkerHealthResponse {
        scheduler: status("degraded"),
        node: status("down"),
    };
    let summary = health::summarize(&report);
    assert_eq!(summary.overall.label, "Degraded");
    assert_eq!(summary.overall.severity, Severity::Yellow);
}

#[test]
fn test_one_sided_report_aggregates_against_unknown() {
    let report = WorkerHealthResponse {
        scheduler: None,
        node: status("down"),
    };
    let summary = health::summarize(&report);
    assert_eq!(summary.overall.label, "Error");
    assert_eq!(summary.overall.severity, Severity::Red);
}

#[test]
fn test_decode_health_payload_with_lenient_response_time() {
    let payload = r#"{
        "scheduler": {"status": "healthy", "response_time_ms": "12.5"},
        "node": {"status": "down", "error": "connection refused", "response_time_ms": null}
    }"#;
    let report = WorkerHealthResponse::from_json(payload).expect("decode");
    let scheduler = report.scheduler.as_ref().unwrap();
    assert_eq!(scheduler.response_time_ms, Some(12.5));
    let node = report.node.as_ref().unwrap();
    assert_eq!(node.response_time_ms, None);
    assert_eq!(node.error.as_deref(), Some("connection refused"));

    let summary = health::summarize(&report);
    assert_eq!(summary.overall.label, "Error");
    assert_eq!(summary.response_time_ms, Some(12.5));
}

#[test]
fn test_decode_rejects_structurally_invalid_json() {
    assert!(WorkerHealthResponse::from_json("not json [[[").is_err());
}

#[test]
fn test_format_response_time_for_display() {
    let report = WorkerHealthResponse {
        scheduler: Some(WorkerHealthStatus {
            status: Some("ok".into()),
            error: None,
            response_time_ms: Some(123.6),
        }),
        node: None,
    };
    let summary = health::summarize(&report);
    assert_eq!(health::format_response_time(summary.response_time_ms), "124 ms");
    assert_eq!(health::format_response_time(None), "--");
}
