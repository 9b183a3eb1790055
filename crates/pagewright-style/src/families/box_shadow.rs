//! Box shadow
//!
//! `box_shadow_style` picks a preset or `custom`, which composes the offset,
//! blur, spread and color fields. Variants fall back to the base value of
//! any field they leave out.

use super::StyleContext;
use crate::breakpoint::StyleVariant;
use crate::css::ResponsiveCss;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, attr_str};

/// Preset shadows by style name
pub const PRESETS: [(&str, &str); 3] = [
	("preset1", "0 2px 4px rgba(0,0,0,0.1)"),
	("preset2", "0 4px 12px rgba(0,0,0,0.15)"),
	("preset3", "0 8px 24px rgba(0,0,0,0.2)"),
];

/// Custom shadow components in shorthand order with their ranges
const COMPONENTS: [(&str, f64, f64); 4] = [
	("box_shadow_horizontal", -100.0, 100.0),
	("box_shadow_vertical", -100.0, 100.0),
	("box_shadow_blur", 0.0, 100.0),
	("box_shadow_spread", -100.0, 100.0),
];

const STYLE: &str = "box_shadow_style";
const COLOR: &str = "box_shadow_color";

/// Fields: style, four ranged lengths and color, responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	let mut fields = vec![FieldSpec::select(STYLE).default("none").responsive().hover()];
	fields.extend(COMPONENTS.iter().map(|(name, min, max)| {
		FieldSpec::number(*name).range(*min, *max).responsive().hover()
	}));
	fields.push(
		FieldSpec::color(COLOR)
			.default("rgba(0,0,0,0.3)")
			.responsive()
			.hover(),
	);
	fields
}

fn shadow(attrs: &Attrs, variant: StyleVariant) -> Option<String> {
	let own = |field: &str| attr_str(attrs, &variant.key(field));
	let value = |field: &str| own(field).or_else(|| attr_str(attrs, field));
	if !variant.is_base()
		&& own(STYLE).is_none()
		&& own(COLOR).is_none()
		&& COMPONENTS.iter().all(|(name, _, _)| own(*name).is_none())
	{
		return None;
	}

	let style = value(STYLE).unwrap_or_else(|| "none".to_string());
	match style.as_str() {
		"none" if variant.is_base() => None,
		"none" => Some("none".to_string()),
		"custom" => {
			let mut parts: Vec<String> = COMPONENTS
				.iter()
				.map(|(name, _, _)| {
					value(*name)
						.and_then(|length| format_length(&length, "px"))
						.unwrap_or_else(|| "0".to_string())
				})
				.collect();
			parts.push(value(COLOR).unwrap_or_else(|| "rgba(0,0,0,0.3)".to_string()));
			Some(parts.join(" "))
		}
		preset => PRESETS
			.iter()
			.find(|(name, _)| *name == preset)
			.map(|(_, shadow)| shadow.to_string()),
	}
}

/// Compile the shadow for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		if let Some(shadow) = shadow(attrs, variant) {
			css.rule(variant.breakpoint(), &variant.selector(selector))
				.push("box-shadow", &shadow);
		}
	}
	css.to_css(&ctx.breakpoints)
}
