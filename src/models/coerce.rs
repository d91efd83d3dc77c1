// Lenient numeric coercion at the API decode boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to a finite number: numbers pass through, numeric
/// strings parse, everything else (null, bool, array, object, non-numeric
/// text) is `None`. NaN and infinities are rejected so derived math never
/// sees them.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// serde adapter for optional numeric fields that must not fail the
/// containing payload. Combine with `#[serde(default)]` for absent fields.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}
