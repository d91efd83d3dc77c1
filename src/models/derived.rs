// Display-ready derived metric models

use serde::{Deserialize, Serialize};

/// CPU display metrics. `usage_percent` is clamped to [0,100] and rounded to
/// one decimal by the deriver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuMetrics {
    pub usage_percent: f64,
    pub cores: u32,
}

/// Used/total byte pair with a bounded percentage; shared by memory and disk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficMetrics {
    pub incoming_bytes: u64,
    pub outgoing_bytes: u64,
    pub total_bytes: u64,
}

/// User engagement counts with derived ratios: active as a share of total,
/// online as a share of active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub total: u64,
    pub active: u64,
    pub online: u64,
    pub active_percent: f64,
    pub online_percent: f64,
}

/// Everything the statistics grid renders, recomputed from each snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub cpu: CpuMetrics,
    pub memory: UsageMetrics,
    pub disk: UsageMetrics,
    pub traffic: TrafficMetrics,
    pub users: UserMetrics,
}
