// Raw system stats as reported by the backend API

use serde::{Deserialize, Serialize};

use super::DecodeError;
use super::coerce::lenient_f64;

/// One point-in-time set of backend-reported system metrics.
///
/// Every field may independently be absent, null, or malformed in the API
/// payload; the lenient decoders resolve those cases to `None` here, and the
/// metrics deriver resolves `None` to zero. Field names match the backend
/// wire format (`total_user` is singular there).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStatsSnapshot {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub incoming_bandwidth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub outgoing_bandwidth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mem_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mem_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub disk_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub disk_total: Option<f64>,
    /// Already a 0-100 percentage on the wire; may still arrive out of range.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cpu_usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cpu_cores: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_user: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub active_users: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub online_users: Option<f64>,
}

impl SystemStatsSnapshot {
    /// Decode an API payload. Unknown fields are ignored; malformed numeric
    /// fields become `None` rather than failing the whole snapshot.
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }
}
