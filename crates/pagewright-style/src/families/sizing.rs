//! Width and height constraints

use super::StyleContext;
use crate::breakpoint::StyleVariant;
use crate::css::ResponsiveCss;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, attr_str};

/// `(attribute, property, unit attribute)` in emission order
const DIMENSIONS: [(&str, &str, &str); 6] = [
	("width", "width", "width_unit"),
	("min_width", "min-width", "width_unit"),
	("max_width", "max-width", "width_unit"),
	("height", "height", "height_unit"),
	("min_height", "min-height", "height_unit"),
	("max_height", "max-height", "height_unit"),
];

/// Fields: six responsive dimensions with hover, plus one unit per axis
pub fn fields() -> Vec<FieldSpec> {
	let mut fields: Vec<FieldSpec> = DIMENSIONS
		.iter()
		.map(|(attr, _, _)| FieldSpec::text(*attr).responsive().hover())
		.collect();
	fields.push(FieldSpec::select("width_unit").default("px"));
	fields.push(FieldSpec::select("height_unit").default("px"));
	fields
}

/// Compile sizing for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		let target = variant.selector(selector);
		for (attr, property, unit_attr) in DIMENSIONS {
			let Some(value) = attr_str(attrs, &variant.key(attr)) else {
				continue;
			};
			let unit = attr_str(attrs, unit_attr).unwrap_or_else(|| "px".to_string());
			let formatted = if unit.eq_ignore_ascii_case("auto") {
				Some("auto".to_string())
			} else {
				format_length(&value, &unit)
			};
			if let Some(formatted) = formatted {
				css.rule(variant.breakpoint(), &target).push(property, &formatted);
			}
		}
	}
	css.to_css(&ctx.breakpoints)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn compile_json(attrs: serde_json::Value) -> String {
		compile(attrs.as_object().unwrap(), ".s", &StyleContext::default())
	}

	#[rstest]
	fn test_emission_order_and_units() {
		let css = compile_json(json!({
			"max_height": "400",
			"width": "50",
			"width_unit": "%",
			"max_width": "none",
			"min_height": "0",
		}));

		assert_eq!(
			css,
			".s {\n    width: 50%;\n    max-width: none;\n    min-height: 0;\n    max-height: 400px;\n}\n"
		);
	}

	#[rstest]
	fn test_auto_unit_forces_auto() {
		let css = compile_json(json!({"height": "300", "height_unit": "auto"}));

		assert!(css.contains("height: auto;"));
	}

	#[rstest]
	fn test_responsive_widths() {
		let css = compile_json(json!({"width__tablet": "80", "width__phone": "100", "width_unit": "%"}));

		assert_eq!(
			css,
			"@media (max-width: 980px) {\n.s {\n    width: 80%;\n}\n}\n@media (max-width: 767px) {\n.s {\n    width: 100%;\n}\n}\n"
		);
	}

	#[rstest]
	fn test_nothing_set_emits_nothing() {
		assert_eq!(compile_json(json!({"width_unit": "px"})), "");
	}

	#[rstest]
	fn test_hover_dimensions() {
		let css = compile_json(json!({"width": "200", "width__hover": "240", "max_height__hover": "none"}));

		assert_eq!(
			css,
			".s {\n    width: 200px;\n}\n.s:hover {\n    width: 240px;\n    max-height: none;\n}\n"
		);
	}
}
