//! Margin and padding
//!
//! Each property holds a box `{top, right, bottom, left, unit, linked}` per
//! variant (`margin`, `margin__tablet`, `margin__phone`, `margin__hover`).
//! The base value may instead nest one box per breakpoint under `desktop`,
//! `tablet` and `mobile` (or `phone`); a flat variant key wins over the
//! nested box. Boxes collapse to the shortest shorthand that preserves them;
//! blank sides are omitted rather than written as zero.

use serde_json::{Value, json};

use super::StyleContext;
use crate::breakpoint::{Breakpoint, StyleVariant};
use crate::css::ResponsiveCss;
use crate::sanitize::sanitize_css_value;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, value_str};

/// Box properties handled by this family
pub const PROPERTIES: [&str; 2] = ["margin", "padding"];

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Default spacing box
pub fn default_box() -> Value {
	json!({"top": "", "right": "", "bottom": "", "left": "", "unit": "px", "linked": false})
}

/// Fields: `margin` and `padding`, responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	PROPERTIES
		.iter()
		.map(|property| {
			FieldSpec::structured(*property, default_box())
				.responsive()
				.hover()
		})
		.collect()
}

/// Declarations for one box.
///
/// A plain string is taken as a ready-made shorthand.
pub fn box_declarations(property: &str, value: &Value) -> Vec<(String, String)> {
	unit_box_declarations(property, value, "px")
}

fn unit_box_declarations(property: &str, value: &Value, default_unit: &str) -> Vec<(String, String)> {
	let sides = match value {
		Value::Object(sides) => sides,
		Value::String(shorthand) => {
			let shorthand = sanitize_css_value(shorthand);
			return if shorthand.is_empty() {
				Vec::new()
			} else {
				vec![(property.to_string(), shorthand)]
			};
		}
		_ => return Vec::new(),
	};
	let unit = sides
		.get("unit")
		.and_then(value_str)
		.unwrap_or_else(|| default_unit.to_string());
	let [top, right, bottom, left] = SIDES.map(|side| {
		sides
			.get(side)
			.and_then(value_str)
			.and_then(|v| format_length(&v, &unit))
	});

	if let (Some(t), Some(r), Some(b), Some(l)) = (&top, &right, &bottom, &left) {
		if t == r && r == b && b == l {
			return vec![(property.to_string(), t.clone())];
		}
		if t == b && r == l {
			return vec![(property.to_string(), format!("{} {}", t, r))];
		}
	}

	SIDES
		.iter()
		.zip([top, right, bottom, left])
		.filter_map(|(side, value)| value.map(|v| (format!("{}-{}", property, side), v)))
		.collect()
}

/// Box nested under the base value for `breakpoint`
fn nested_box(base: &Value, breakpoint: Breakpoint) -> Option<&Value> {
	let names: &[&str] = match breakpoint {
		Breakpoint::Desktop => &["desktop"],
		Breakpoint::Tablet => &["tablet"],
		Breakpoint::Phone => &["phone", "mobile"],
	};
	names.iter().find_map(|name| base.get(*name))
}

fn variant_declarations(attrs: &Attrs, property: &str, variant: StyleVariant) -> Vec<(String, String)> {
	let direct = attrs
		.get(&variant.key(property))
		.map(|value| box_declarations(property, value))
		.unwrap_or_default();
	if !direct.is_empty() {
		return direct;
	}
	let StyleVariant::At(breakpoint) = variant else {
		return direct;
	};
	let Some(base) = attrs.get(property) else {
		return direct;
	};
	let unit = base
		.get("unit")
		.and_then(value_str)
		.unwrap_or_else(|| "px".to_string());
	nested_box(base, breakpoint)
		.map(|nested| unit_box_declarations(property, nested, &unit))
		.unwrap_or_default()
}

/// Compile margin and padding for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		let target = variant.selector(selector);
		for property in PROPERTIES {
			for (name, value) in variant_declarations(attrs, property, variant) {
				css.rule(variant.breakpoint(), &target).push(&name, &value);
			}
		}
	}
	css.to_css(&ctx.breakpoints)
}
