use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // optional minus, digits, optional decimal point and more digits,
    // anchored at the start
    RE.get_or_init(|| Regex::new(r"^-?\d+\.?\d*").unwrap())
}

// Leading numeric magnitude of mixed values like "16px" or "-3.5rem".
// Numbers pass through unchanged; anything without a numeric prefix is 0.
pub fn numeric_prefix(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => prefix_re()
            .find(s)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}
