//! Display helpers shared by the tool handlers.

use serde_json::Value;

/// Placeholder for a field that is missing or not numeric.
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper-case the first character and lower-case the rest.
///
/// `"mr-mime"` becomes `"Mr-mime"`; only the very first character is
/// touched, word boundaries are ignored.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert an upstream measure in tenths (decimeters, hectograms) to a
/// one-decimal string in whole units.
pub fn tenths(value: Option<&Value>) -> String {
    match value.and_then(Value::as_f64) {
        Some(raw) => format!("{:.1}", raw / 10.0),
        None => NOT_AVAILABLE.to_string(),
    }
}
