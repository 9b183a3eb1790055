//! Overflow and white-space
//!
//! `overflow_x` / `overflow_y` win over the `overflow` shorthand whenever
//! either is set for a breakpoint or for hover.

use super::StyleContext;
use crate::breakpoint::StyleVariant;
use crate::css::ResponsiveCss;
use crate::schema::FieldSpec;
use crate::value::{Attrs, attr_str};

/// Fields: overflow, per-axis overflow and white-space, all responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	["overflow", "overflow_x", "overflow_y", "white_space"]
		.into_iter()
		.map(|name| FieldSpec::select(name).responsive().hover())
		.collect()
}

/// Compile overflow rules for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		let breakpoint = variant.breakpoint();
		let target = variant.selector(selector);
		let x = attr_str(attrs, &variant.key("overflow_x"));
		let y = attr_str(attrs, &variant.key("overflow_y"));
		if x.is_some() || y.is_some() {
			if let Some(x) = x {
				css.rule(breakpoint, &target).push("overflow-x", &x);
			}
			if let Some(y) = y {
				css.rule(breakpoint, &target).push("overflow-y", &y);
			}
		} else if let Some(overflow) = attr_str(attrs, &variant.key("overflow")) {
			css.rule(breakpoint, &target).push("overflow", &overflow);
		}
		if let Some(white_space) = attr_str(attrs, &variant.key("white_space")) {
			css.rule(breakpoint, &target)
				.push("white-space", &white_space);
		}
	}
	css.to_css(&ctx.breakpoints)
}
