// Derive display metrics from a raw stats snapshot.
// Every output value is safe to render as-is: percentages are bounded,
// counts are non-negative, and a missing snapshot yields all zeros.

use crate::models::{
    CpuMetrics, DerivedMetrics, SystemStatsSnapshot, TrafficMetrics, UsageMetrics, UserMetrics,
};

/// Resolve a lenient field: absent or non-finite becomes 0, negatives floor
/// at 0.
fn resolve(field: Option<f64>) -> f64 {
    field.filter(|v| v.is_finite()).map_or(0.0, |v| v.max(0.0))
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// used/total as a bounded percentage. A zero denominator yields 0, never
/// NaN or infinity.
fn ratio_percent(used: f64, total: f64) -> f64 {
    if total > 0.0 {
        clamp_percent(used / total * 100.0)
    } else {
        0.0
    }
}

fn usage_metrics(used: Option<f64>, total: Option<f64>) -> UsageMetrics {
    let used = resolve(used);
    let total = resolve(total);
    UsageMetrics {
        used_bytes: used as u64,
        total_bytes: total as u64,
        percent: ratio_percent(used, total),
    }
}

/// CPU usage is already a 0-100 percentage on the wire; clamp it and round
/// to one decimal place for the card.
pub fn derive_cpu(snapshot: Option<&SystemStatsSnapshot>) -> CpuMetrics {
    let Some(s) = snapshot else {
        return CpuMetrics::default();
    };
    let usage = clamp_percent(resolve(s.cpu_usage));
    CpuMetrics {
        usage_percent: (usage * 10.0).round() / 10.0,
        cores: resolve(s.cpu_cores) as u32,
    }
}

pub fn derive_memory(snapshot: Option<&SystemStatsSnapshot>) -> UsageMetrics {
    match snapshot {
        Some(s) => usage_metrics(s.mem_used, s.mem_total),
        None => UsageMetrics::default(),
    }
}

pub fn derive_disk(snapshot: Option<&SystemStatsSnapshot>) -> UsageMetrics {
    match snapshot {
        Some(s) => usage_metrics(s.disk_used, s.disk_total),
        None => UsageMetrics::default(),
    }
}

pub fn derive_traffic(snapshot: Option<&SystemStatsSnapshot>) -> TrafficMetrics {
    let Some(s) = snapshot else {
        return TrafficMetrics::default();
    };
    let incoming = resolve(s.incoming_bandwidth) as u64;
    let outgoing = resolve(s.outgoing_bandwidth) as u64;
    TrafficMetrics {
        incoming_bytes: incoming,
        outgoing_bytes: outgoing,
        total_bytes: incoming.saturating_add(outgoing),
    }
}

/// Engagement ratios: active as a share of total users, online as a share of
/// active users. Each guard is independent, so `online_percent` is still
/// meaningful when `total` is missing.
pub fn derive_user_stats(snapshot: Option<&SystemStatsSnapshot>) -> UserMetrics {
    let Some(s) = snapshot else {
        return UserMetrics::default();
    };
    let total = resolve(s.total_user);
    let active = resolve(s.active_users);
    let online = resolve(s.online_users);
    UserMetrics {
        total: total as u64,
        active: active as u64,
        online: online as u64,
        active_percent: ratio_percent(active, total),
        online_percent: ratio_percent(online, active),
    }
}

/// Everything the statistics grid needs, in one pass.
pub fn derive(snapshot: Option<&SystemStatsSnapshot>) -> DerivedMetrics {
    DerivedMetrics {
        cpu: derive_cpu(snapshot),
        memory: derive_memory(snapshot),
        disk: derive_disk(snapshot),
        traffic: derive_traffic(snapshot),
        users: derive_user_stats(snapshot),
    }
}
