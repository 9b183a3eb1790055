//! Attribute value coercion
//!
//! Attribute values arrive as strings, numbers or booleans depending on the
//! producer. These helpers read them uniformly.

use serde_json::{Map, Value};

/// Ordered attribute map
pub type Attrs = Map<String, Value>;

/// Non-blank string form of a scalar value
pub fn value_str(value: &Value) -> Option<String> {
	match value {
		Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

/// Non-blank string form of `attrs[key]`
pub fn attr_str(attrs: &Attrs, key: &str) -> Option<String> {
	attrs.get(key).and_then(value_str)
}

/// Truthiness of a toggle value
pub fn value_flag(value: &Value) -> bool {
	match value {
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => matches!(
			s.trim().to_ascii_lowercase().as_str(),
			"1" | "true" | "yes" | "on"
		),
		_ => false,
	}
}

/// Truthiness of `attrs[key]`, false when absent
pub fn attr_flag(attrs: &Attrs, key: &str) -> bool {
	attrs.get(key).is_some_and(value_flag)
}

/// Numeric value of a number or numeric string
pub fn parse_number(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
		_ => None,
	}
}

/// Shortest decimal rendering: `1.0` becomes `1`, `0.50` becomes `0.5`
pub fn format_number(n: f64) -> String {
	if n.fract() == 0.0 && n.abs() < 1e15 {
		format!("{}", n as i64)
	} else {
		let text = format!("{:.4}", n);
		text.trim_end_matches('0').trim_end_matches('.').to_string()
	}
}

/// Nested object at `attrs[key]`
pub fn attr_object<'a>(attrs: &'a Attrs, key: &str) -> Option<&'a Attrs> {
	attrs.get(key).and_then(Value::as_object)
}
