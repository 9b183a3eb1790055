//! Base stylesheet
//!
//! Layout defaults for the structural wrappers, the video background layer
//! and the visibility classes. Emitted once per render ahead of node CSS.

use pagewright_style::css::wrap_media_query;
use pagewright_style::prelude::*;

/// Base stylesheet for `ctx`
pub fn base_css(ctx: &StyleContext) -> String {
	let p = &ctx.class_prefix;
	let Breakpoints { tablet, phone } = ctx.breakpoints;
	let rules = [
		Rule::new(format!(".{}-section", p))
			.declare("position", "relative")
			.declare("padding", "50px 0"),
		Rule::new(format!(".{}-section-inner", p))
			.declare("position", "relative")
			.declare("max-width", "1080px")
			.declare("margin", "0 auto"),
		Rule::new(format!(".{}-row", p))
			.declare("position", "relative")
			.declare("display", "flex")
			.declare("flex-wrap", "wrap")
			.declare("gap", "30px"),
		Rule::new(format!(".{}-column", p))
			.declare("position", "relative")
			.declare("flex", "1 1 0")
			.declare("min-width", "0"),
		Rule::new(format!(".{}-module", p)).declare("position", "relative"),
		Rule::new(format!(".{}-video-background", p))
			.declare("position", "absolute")
			.declare("top", "0")
			.declare("left", "0")
			.declare("width", "100%")
			.declare("height", "100%")
			.declare("object-fit", "cover")
			.declare("pointer-events", "none"),
	];
	let mut css: String = rules.iter().map(Rule::to_css).collect();

	let hidden = |name: &str| Rule::new(format!(".{}-hide-{}", p, name)).declare("display", "none").to_css();
	let stacked = Rule::new(format!(".{}-row", p)).declare("flex-direction", "column").to_css();
	css.push_str(&wrap_media_query(
		&format!("@media (min-width: {}px)", tablet + 1),
		&hidden("desktop"),
	));
	css.push_str(&wrap_media_query(
		&format!("@media (min-width: {}px) and (max-width: {}px)", phone + 1, tablet),
		&hidden("tablet"),
	));
	css.push_str(&wrap_media_query(
		&format!("@media (max-width: {}px)", phone),
		&format!("{}{}", stacked, hidden("phone")),
	));
	css
}
