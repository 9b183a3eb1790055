//! Unit policy shared by every length-valued field

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sanitize::sanitize_css_value;

static UNIT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?i)(px|em|rem|%|vh|vw)$").expect("Invalid unit suffix regex pattern")
});

/// Keywords that never receive a unit
pub const KEYWORDS: &[&str] = &["auto", "inherit", "initial", "none"];

/// Format a length with its configured unit.
///
/// Returns `None` when the value is blank after sanitization. Keywords and
/// already-suffixed values pass through, `"0"` stays unitless and only
/// numeric values receive `unit`.
pub fn format_length(value: &str, unit: &str) -> Option<String> {
	let value = sanitize_css_value(value);
	if value.is_empty() {
		return None;
	}
	if KEYWORDS.contains(&value.to_ascii_lowercase().as_str()) || value == "0" {
		return Some(value);
	}
	if UNIT_SUFFIX.is_match(&value) || value.parse::<f64>().is_err() {
		return Some(value);
	}
	Some(format!("{}{}", value, sanitize_css_value(unit)))
}
