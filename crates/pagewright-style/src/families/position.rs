//! Position type, z-index and offsets
//!
//! `position` and `z_index` are global. The four offsets are per breakpoint
//! and may carry a hover value.

use super::StyleContext;
use crate::breakpoint::{Breakpoint, StyleVariant};
use crate::css::ResponsiveCss;
use crate::sanitize::sanitize_css_value;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, attr_str};

/// `(attribute, property)` offsets in emission order
const OFFSETS: [(&str, &str); 4] = [
	("position_top", "top"),
	("position_right", "right"),
	("position_bottom", "bottom"),
	("position_left", "left"),
];

/// Fields: position type, z-index, four responsive offsets and their unit
pub fn fields() -> Vec<FieldSpec> {
	let mut fields = vec![
		FieldSpec::select("position").default(""),
		FieldSpec::text("z_index"),
	];
	fields.extend(
		OFFSETS
			.iter()
			.map(|(attr, _)| FieldSpec::text(*attr).responsive().hover()),
	);
	fields.push(FieldSpec::select("position_unit").default("px"));
	fields
}

fn z_index(attrs: &Attrs) -> Option<String> {
	let value = sanitize_css_value(&attr_str(attrs, "z_index")?);
	(value == "auto" || value.parse::<i64>().is_ok()).then_some(value)
}

/// Compile position rules, desktop first
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	if let Some(position) = attr_str(attrs, "position") {
		css.rule(Breakpoint::Desktop, selector)
			.push("position", &position);
	}
	if let Some(z_index) = z_index(attrs) {
		css.rule(Breakpoint::Desktop, selector)
			.push("z-index", &z_index);
	}
	let unit = attr_str(attrs, "position_unit").unwrap_or_else(|| "px".to_string());
	for variant in StyleVariant::ALL {
		let target = variant.selector(selector);
		for (attr, property) in OFFSETS {
			let formatted = attr_str(attrs, &variant.key(attr))
				.and_then(|value| format_length(&value, &unit));
			if let Some(formatted) = formatted {
				css.rule(variant.breakpoint(), &target).push(property, &formatted);
			}
		}
	}
	css.to_css(&ctx.breakpoints)
}
