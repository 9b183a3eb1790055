//! Entrance animations
//!
//! The `animation` structure names a keyframes type and its timing. The
//! trigger decides where the `animation` shorthand lands:
//!
//! - `load`: on the element itself
//! - `hover`: under `:hover`
//! - `scroll`: the element starts hidden and the shorthand sits under the
//!   animated marker class, which an external scroll observer adds

use serde_json::{Value, json};

use super::StyleContext;
use crate::css::Rule;
use crate::sanitize::sanitize_css_value;
use crate::schema::FieldSpec;
use crate::value::{Attrs, attr_object, attr_str};

/// When an animation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	/// On page load
	Load,
	/// While hovered
	Hover,
	/// When scrolled into view
	Scroll,
}

impl Trigger {
	/// Parse a trigger name, unknown names mean load
	pub fn parse(value: &str) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"hover" => Self::Hover,
			"scroll" => Self::Scroll,
			_ => Self::Load,
		}
	}
}

/// Default animation structure
pub fn default_animation() -> Value {
	json!({
		"type": "",
		"duration": "400",
		"delay": "0",
		"easing": "ease",
		"iteration": "1",
		"direction": "normal",
		"fill_mode": "forwards",
		"trigger": "load",
		"scroll_offset": "100"
	})
}

/// Fields: `animation`
pub fn fields() -> Vec<FieldSpec> {
	vec![FieldSpec::structured("animation", default_animation())]
}

/// Sanitized animation type, `None` when animations are off
pub fn animation_type(attrs: &Attrs) -> Option<String> {
	let animation = attr_object(attrs, "animation")?;
	let kind = sanitize_css_value(&attr_str(animation, "type")?);
	(!kind.is_empty() && kind != "none").then_some(kind)
}

fn milliseconds(animation: &Attrs, key: &str, default: &str) -> String {
	let value = attr_str(animation, key)
		.map(|value| sanitize_css_value(&value))
		.filter(|value| !value.is_empty())
		.unwrap_or_else(|| default.to_string());
	if value.ends_with("ms") || value.ends_with('s') {
		value
	} else {
		format!("{}ms", value)
	}
}

/// The `animation` shorthand value
pub fn shorthand(animation: &Attrs, kind: &str, ctx: &StyleContext) -> String {
	let part = |key: &str, default: &str| {
		attr_str(animation, key)
			.map(|value| sanitize_css_value(&value))
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| default.to_string())
	};
	format!(
		"{}-{} {} {} {} {} {} {}",
		ctx.class_prefix,
		kind,
		milliseconds(animation, "duration", "400"),
		part("easing", "ease"),
		milliseconds(animation, "delay", "0"),
		part("iteration", "1"),
		part("direction", "normal"),
		part("fill_mode", "forwards"),
	)
}

/// Compile the animation rules for `selector`
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let (Some(kind), Some(animation)) = (animation_type(attrs), attr_object(attrs, "animation"))
	else {
		return String::new();
	};
	let value = shorthand(animation, &kind, ctx);
	let trigger = Trigger::parse(&attr_str(animation, "trigger").unwrap_or_default());
	match trigger {
		Trigger::Hover => Rule::new(format!("{}:hover", selector))
			.declare("animation", &value)
			.to_css(),
		Trigger::Scroll => {
			let mut hidden = Rule::new(selector);
			hidden.push_static("opacity", "0");
			let animated = Rule::new(format!("{}.{}", selector, ctx.animated_class()))
				.declare("animation", &value);
			format!("{}{}", hidden.to_css(), animated.to_css())
		}
		Trigger::Load => Rule::new(selector).declare("animation", &value).to_css(),
	}
}

/// Data attributes consumed by the scroll observer script
pub fn data_attributes(attrs: &Attrs, ctx: &StyleContext) -> Vec<(String, String)> {
	let (Some(kind), Some(animation)) = (animation_type(attrs), attr_object(attrs, "animation"))
	else {
		return Vec::new();
	};
	let mut data = vec![(format!("data-{}-animation", ctx.class_prefix), kind)];
	let trigger = Trigger::parse(&attr_str(animation, "trigger").unwrap_or_default());
	if trigger == Trigger::Scroll {
		let offset = attr_str(animation, "scroll_offset").unwrap_or_else(|| "100".to_string());
		data.push((format!("data-{}-offset", ctx.class_prefix), offset));
	}
	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn attrs(animation: Value) -> Attrs {
		let mut merged = default_animation();
		for (key, value) in animation.as_object().unwrap() {
			merged[key] = value.clone();
		}
		json!({"animation": merged}).as_object().cloned().unwrap()
	}

	#[rstest]
	fn test_empty_type_emits_nothing() {
		let attrs = attrs(json!({"type": ""}));

		assert_eq!(compile(&attrs, ".a", &StyleContext::default()), "");
		assert!(data_attributes(&attrs, &StyleContext::default()).is_empty());
	}

	#[rstest]
	fn test_load_trigger() {
		let css = compile(&attrs(json!({"type": "fade"})), ".a", &StyleContext::default());

		assert_eq!(css, ".a {\n    animation: pw-fade 400ms ease 0ms 1 normal forwards;\n}\n");
	}

	#[rstest]
	fn test_hover_trigger_has_no_unscoped_rule() {
		let css = compile(
			&attrs(json!({"type": "fade", "trigger": "hover", "duration": 600})),
			".a",
			&StyleContext::default(),
		);

		assert_eq!(css, ".a:hover {\n    animation: pw-fade 600ms ease 0ms 1 normal forwards;\n}\n");
		assert!(!css.contains(".a {"));
	}

	#[rstest]
	fn test_scroll_trigger() {
		// Arrange
		let attrs = attrs(json!({"type": "slide-up", "trigger": "scroll", "iteration": "infinite", "delay": "1s"}));
		let ctx = StyleContext::new("pw");

		// Act
		let css = compile(&attrs, ".a", &ctx);
		let data = data_attributes(&attrs, &ctx);

		// Assert
		assert_eq!(
			css,
			".a {\n    opacity: 0;\n}\n.a.pw-animated {\n    animation: pw-slide-up 400ms ease 1s infinite normal forwards;\n}\n"
		);
		assert_eq!(
			data,
			vec![
				("data-pw-animation".to_string(), "slide-up".to_string()),
				("data-pw-offset".to_string(), "100".to_string()),
			]
		);
	}

	#[rstest]
	fn test_values_sanitized() {
		let css = compile(
			&attrs(json!({"type": "fade;}", "easing": "ease\"; color: red"})),
			".a",
			&StyleContext::default(),
		);

		assert!(css.contains("animation: pw-fade 400ms ease color: red 0ms"));
		assert!(!css.contains('"'));
	}

	#[rstest]
	#[case("HOVER", Trigger::Hover)]
	#[case("scroll", Trigger::Scroll)]
	#[case("load", Trigger::Load)]
	#[case("", Trigger::Load)]
	fn test_trigger_parse(#[case] value: &str, #[case] expected: Trigger) {
		assert_eq!(Trigger::parse(value), expected);
	}
}
