//! Scroll-driven motion effects
//!
//! Six effects interpolate between a start and an end value while the
//! element crosses the viewport. Only the start state is compiled to CSS;
//! the interpolation itself belongs to an external scroll observer, which
//! reads the per-effect JSON data attributes.

use serde_json::{Map, Value, json};

use super::StyleContext;
use crate::css::Rule;
use crate::schema::{FieldSpec, RangeWarning};
use crate::value::{Attrs, attr_flag, attr_object, attr_str, format_number, parse_number};

/// Viewport positions an effect may start or end at
pub const VIEWPORT_POSITIONS: [&str; 3] = ["bottom", "middle", "top"];

/// Static description of one motion effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEffect {
	/// Key inside `motion.effects`
	pub name: &'static str,
	/// Unit of start/end values
	pub unit: &'static str,
	/// Lowest accepted value
	pub min: f64,
	/// Highest accepted value
	pub max: f64,
	/// Default start value
	pub start: f64,
	/// Default end value
	pub end: f64,
	/// Start value that leaves the element untouched
	pub identity: f64,
}

/// Effects in transform composition order, followed by fade and blur
pub const EFFECTS: [MotionEffect; 6] = [
	MotionEffect { name: "vertical", unit: "px", min: -500.0, max: 500.0, start: 0.0, end: 0.0, identity: 0.0 },
	MotionEffect { name: "horizontal", unit: "px", min: -500.0, max: 500.0, start: 0.0, end: 0.0, identity: 0.0 },
	MotionEffect { name: "scale", unit: "", min: 0.0, max: 2.0, start: 0.5, end: 1.0, identity: 1.0 },
	MotionEffect { name: "rotate", unit: "deg", min: -360.0, max: 360.0, start: 0.0, end: 0.0, identity: 0.0 },
	MotionEffect { name: "fade", unit: "%", min: 0.0, max: 100.0, start: 0.0, end: 100.0, identity: 100.0 },
	MotionEffect { name: "blur", unit: "px", min: 0.0, max: 50.0, start: 10.0, end: 0.0, identity: 0.0 },
];

/// Look up an effect by name
pub fn effect(name: &str) -> Option<&'static MotionEffect> {
	EFFECTS.iter().find(|effect| effect.name == name)
}

/// Default motion structure
pub fn default_motion() -> Value {
	let effects: Map<String, Value> = EFFECTS
		.iter()
		.map(|effect| {
			(
				effect.name.to_string(),
				json!({
					"enabled": false,
					"start": format_number(effect.start),
					"end": format_number(effect.end),
					"viewport_start": "bottom",
					"viewport_end": "top"
				}),
			)
		})
		.collect();
	json!({"enabled": false, "effects": effects})
}

/// Fields: `motion`, validated on resolution
pub fn fields() -> Vec<FieldSpec> {
	vec![FieldSpec::structured("motion", default_motion()).validator(validate)]
}

/// Clamp start/end into each effect's range and reset unknown viewport positions
pub fn validate(field: &str, value: &mut Value) -> Vec<RangeWarning> {
	let mut warnings = Vec::new();
	let Some(effects) = value.get_mut("effects").and_then(Value::as_object_mut) else {
		return warnings;
	};
	for (name, settings) in effects.iter_mut() {
		let (Some(spec), Some(settings)) = (effect(name), settings.as_object_mut()) else {
			continue;
		};
		for key in ["start", "end"] {
			let Some(number) = settings.get(key).and_then(parse_number) else {
				continue;
			};
			let path = format!("{}.effects.{}.{}", field, name, key);
			if let Some(warning) = RangeWarning::check(path, number, spec.min, spec.max) {
				settings.insert(key.to_string(), Value::from(format_number(warning.clamped)));
				warnings.push(warning);
			}
		}
		for (key, default) in [("viewport_start", "bottom"), ("viewport_end", "top")] {
			let valid = settings
				.get(key)
				.and_then(Value::as_str)
				.is_some_and(|position| VIEWPORT_POSITIONS.contains(&position));
			if !valid {
				tracing::debug!(effect = %name, key, "resetting unknown viewport position");
				settings.insert(key.to_string(), Value::from(default));
			}
		}
	}
	warnings
}

/// Enabled effects with their parsed start values, in [`EFFECTS`] order
fn enabled_effects(attrs: &Attrs) -> Vec<(&'static MotionEffect, &Attrs)> {
	let Some(motion) = attr_object(attrs, "motion") else {
		return Vec::new();
	};
	if !attr_flag(motion, "enabled") {
		return Vec::new();
	}
	let Some(effects) = attr_object(motion, "effects") else {
		return Vec::new();
	};
	EFFECTS
		.iter()
		.filter_map(|spec| {
			let settings = attr_object(effects, spec.name)?;
			attr_flag(settings, "enabled").then_some((spec, settings))
		})
		.collect()
}

/// Compile the initial motion state for `selector`
pub fn compile(attrs: &Attrs, selector: &str, _ctx: &StyleContext) -> String {
	let mut transforms = Vec::new();
	let mut opacity = None;
	let mut blur = None;
	for (spec, settings) in enabled_effects(attrs) {
		let Some(start) = settings.get("start").and_then(parse_number) else {
			continue;
		};
		if start == spec.identity {
			continue;
		}
		let start_text = format_number(start);
		match spec.name {
			"vertical" => transforms.push(format!("translateY({}px)", start_text)),
			"horizontal" => transforms.push(format!("translateX({}px)", start_text)),
			"scale" => transforms.push(format!("scale({})", start_text)),
			"rotate" => transforms.push(format!("rotate({}deg)", start_text)),
			"fade" => opacity = Some(format_number(start / 100.0)),
			"blur" => blur = Some(format!("blur({}px)", start_text)),
			_ => {}
		}
	}
	if transforms.is_empty() && opacity.is_none() && blur.is_none() {
		return String::new();
	}

	let mut rule = Rule::new(selector);
	rule.push_static("will-change", "transform, opacity, filter");
	if !transforms.is_empty() {
		rule.push("transform", &transforms.join(" "));
	}
	if let Some(opacity) = opacity {
		rule.push("opacity", &opacity);
	}
	if let Some(blur) = blur {
		rule.push("filter", &blur);
	}
	rule.to_css()
}

/// Data attributes consumed by the scroll observer script.
///
/// Each enabled effect gets a JSON payload with its start, end and viewport
/// positions.
pub fn data_attributes(attrs: &Attrs, ctx: &StyleContext) -> Vec<(String, String)> {
	let effects = enabled_effects(attrs);
	if effects.is_empty() {
		return Vec::new();
	}
	let mut data = vec![(format!("data-{}-motion", ctx.class_prefix), "true".to_string())];
	for (spec, settings) in effects {
		let number = |key: &str, default: f64| {
			settings
				.get(key)
				.and_then(parse_number)
				.unwrap_or(default)
				.clamp(spec.min, spec.max)
		};
		let position = |key: &str, default: &str| {
			attr_str(settings, key)
				.filter(|position| VIEWPORT_POSITIONS.contains(&position.as_str()))
				.unwrap_or_else(|| default.to_string())
		};
		let payload = json!({
			"start": number("start", spec.start),
			"end": number("end", spec.end),
			"viewportStart": position("viewport_start", "bottom"),
			"viewportEnd": position("viewport_end", "top"),
		});
		data.push((
			format!("data-{}-motion-{}", ctx.class_prefix, spec.name),
			payload.to_string(),
		));
	}
	data
}
