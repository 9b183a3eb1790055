//! Style field resolution
//!
//! Produces a total attribute map so compilers never meet a missing value.
//! Precedence, highest first: explicit attribute, module default style value,
//! schema default. Structured values are merged key by key, so a partial
//! explicit background still gets the default gradient stops. Variant keys
//! (`__tablet`, `__phone`, `__hover`) and keys unknown to the schema are kept.

use serde_json::Value;

use crate::breakpoint::{Breakpoint, HOVER_SUFFIX};
use crate::schema::{FieldKind, FieldSchema, FieldSpec, RangeWarning};
use crate::value::{Attrs, format_number, parse_number};

/// Outcome of resolving one node's attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
	/// Total attribute map
	pub attrs: Attrs,
	/// Values clamped into range while resolving
	pub warnings: Vec<RangeWarning>,
}

/// Merge `explicit` over `default`.
///
/// Objects merge recursively. `null` never overrides, and an empty list
/// falls back to a non-empty default list. Anything else replaces.
pub fn merge_structured(default: &Value, explicit: &Value) -> Value {
	match (default, explicit) {
		(_, Value::Null) => default.clone(),
		(Value::Object(base), Value::Object(overlay)) => {
			let mut merged = base.clone();
			for (key, value) in overlay {
				let value = match merged.get(key) {
					Some(existing) => merge_structured(existing, value),
					None => value.clone(),
				};
				merged.insert(key.clone(), value);
			}
			Value::Object(merged)
		}
		(Value::Array(base), Value::Array(overlay)) if overlay.is_empty() && !base.is_empty() => {
			default.clone()
		}
		_ => explicit.clone(),
	}
}

/// Resolve `explicit` attributes against `schema`, layering `style_defaults` in between
pub fn resolve(schema: &FieldSchema, style_defaults: &Attrs, explicit: &Attrs) -> Resolved {
	let mut attrs = Attrs::new();
	for (key, value) in style_defaults {
		attrs.insert(key.clone(), value.clone());
	}
	for (key, value) in explicit {
		let value = match attrs.get(key) {
			Some(layered) => merge_structured(layered, value),
			None => value.clone(),
		};
		attrs.insert(key.clone(), value);
	}

	let mut warnings = Vec::new();
	for field in schema.iter() {
		let value = match attrs.get(&field.name) {
			Some(current) if field.kind == FieldKind::Structured => {
				merge_structured(&field.default, current)
			}
			Some(current) if !current.is_null() => current.clone(),
			_ => field.default.clone(),
		};
		if !value.is_null() {
			attrs.insert(field.name.clone(), value);
		}
		clamp_field(field, &mut attrs, &mut warnings);
		if let Some(validator) = field.validator {
			if let Some(value) = attrs.get_mut(&field.name) {
				warnings.extend(validator(&field.name, value));
			}
		}
	}

	for warning in &warnings {
		tracing::debug!(%warning, "clamped style value");
	}
	Resolved { attrs, warnings }
}

fn variant_keys(field: &FieldSpec) -> Vec<String> {
	let mut keys = vec![field.name.clone()];
	if field.responsive {
		keys.push(Breakpoint::Tablet.key(&field.name));
		keys.push(Breakpoint::Phone.key(&field.name));
	}
	if field.hover {
		keys.push(format!("{}{}", field.name, HOVER_SUFFIX));
	}
	keys
}

fn clamp_field(field: &FieldSpec, attrs: &mut Attrs, warnings: &mut Vec<RangeWarning>) {
	let Some((min, max)) = field.range else {
		return;
	};
	for key in variant_keys(field) {
		let Some(value) = attrs.get_mut(&key) else {
			continue;
		};
		let Some(number) = parse_number(value) else {
			continue;
		};
		if let Some(warning) = RangeWarning::check(key.as_str(), number, min, max) {
			*value = match value {
				Value::Number(_) => Value::from(warning.clamped),
				_ => Value::from(format_number(warning.clamped)),
			};
			warnings.push(warning);
		}
	}
}
