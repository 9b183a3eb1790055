//! Borders
//!
//! `border_width` is a side box and `border_radius` a corner box, both in
//! `unit` (px by default). Every field reads breakpoint and hover variants.

use serde_json::{Value, json};

use super::StyleContext;
use crate::breakpoint::StyleVariant;
use crate::css::ResponsiveCss;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, attr_str, value_str};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

const CORNERS: [&str; 4] = ["top_left", "top_right", "bottom_right", "bottom_left"];

/// Default border width box
pub fn default_width() -> Value {
	json!({"top": "", "right": "", "bottom": "", "left": "", "unit": "px"})
}

/// Default border radius box
pub fn default_radius() -> Value {
	json!({"top_left": "", "top_right": "", "bottom_right": "", "bottom_left": "", "unit": "px"})
}

/// Fields: width, style, color and radius, responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	vec![
		FieldSpec::structured("border_width", default_width()).responsive().hover(),
		FieldSpec::select("border_style").responsive().hover(),
		FieldSpec::color("border_color").responsive().hover(),
		FieldSpec::structured("border_radius", default_radius()).responsive().hover(),
	]
}

/// Four-value shorthand for a side or corner box.
///
/// Blank entries become `0` once any entry is set; four equal values
/// collapse to one. A plain value is one length for every entry.
pub fn box_shorthand(value: &Value, keys: [&str; 4]) -> Option<String> {
	let entries = match value {
		Value::Object(entries) => entries,
		other => return value_str(other).and_then(|length| format_length(&length, "px")),
	};
	let unit = entries
		.get("unit")
		.and_then(value_str)
		.unwrap_or_else(|| "px".to_string());
	let lengths = keys.map(|key| {
		entries
			.get(key)
			.and_then(value_str)
			.and_then(|length| format_length(&length, &unit))
	});
	if lengths.iter().all(Option::is_none) {
		return None;
	}
	let lengths = lengths.map(|length| length.unwrap_or_else(|| "0".to_string()));
	if lengths.iter().all(|length| *length == lengths[0]) {
		return Some(lengths[0].clone());
	}
	Some(lengths.join(" "))
}

/// Compile border rules for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		let target = variant.selector(selector);
		if let Some(width) = attrs
			.get(&variant.key("border_width"))
			.and_then(|value| box_shorthand(value, SIDES))
		{
			css.rule(variant.breakpoint(), &target).push("border-width", &width);
		}
		if let Some(style) = attr_str(attrs, &variant.key("border_style"))
			.filter(|style| !(variant.is_base() && style == "none"))
		{
			css.rule(variant.breakpoint(), &target).push("border-style", &style);
		}
		if let Some(color) = attr_str(attrs, &variant.key("border_color")) {
			css.rule(variant.breakpoint(), &target).push("border-color", &color);
		}
		if let Some(radius) = attrs
			.get(&variant.key("border_radius"))
			.and_then(|value| box_shorthand(value, CORNERS))
		{
			css.rule(variant.breakpoint(), &target).push("border-radius", &radius);
		}
	}
	css.to_css(&ctx.breakpoints)
}
