//! Backgrounds
//!
//! The `background` field is a structure whose `type` selects one of
//! `color`, `gradient`, `image` or `video`. Video playback is markup, so the
//! CSS side only carries the poster as a fallback image. `background__tablet`,
//! `background__phone` and `background__hover` overlay the base structure;
//! their rules carry only the declarations that differ from the base rule.

use serde_json::{Value, json};

use super::StyleContext;
use crate::breakpoint::{Breakpoint, StyleVariant};
use crate::css::{ResponsiveCss, Rule};
use crate::resolver::merge_structured;
use crate::sanitize::sanitize_css_value;
use crate::schema::FieldSpec;
use crate::value::{
	Attrs, attr_flag, attr_object, attr_str, format_number, parse_number, value_flag, value_str,
};

/// Default background structure
pub fn default_background() -> Value {
	json!({
		"type": "",
		"color": "",
		"gradient": {
			"type": "linear",
			"direction": "to bottom",
			"angle": "",
			"stops": [
				{"color": "#ffffff", "position": "0"},
				{"color": "#000000", "position": "100"}
			]
		},
		"image": {
			"url": "",
			"size": "cover",
			"size_custom": "",
			"position": "center center",
			"position_x": "50",
			"position_y": "50",
			"repeat": "no-repeat",
			"attachment": "scroll"
		},
		"video": {
			"url": "",
			"poster": "",
			"loop": true,
			"muted": true,
			"autoplay": true
		},
		"overlay": {
			"enabled": false,
			"color": "rgba(0,0,0,0.5)"
		}
	})
}

/// Fields: `background`, responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	vec![FieldSpec::structured("background", default_background())
		.responsive()
		.hover()]
}

/// Gradient value such as `linear-gradient(to bottom, #fff 0%, #000 100%)`.
///
/// Returns `None` when no stop has a color.
pub fn gradient_css(gradient: &Attrs) -> Option<String> {
	let stops = gradient
		.get("stops")
		.and_then(Value::as_array)
		.map(|stops| {
			stops
				.iter()
				.filter_map(Value::as_object)
				.filter_map(gradient_stop)
				.collect::<Vec<_>>()
		})
		.unwrap_or_default();
	if stops.is_empty() {
		return None;
	}
	let stops = stops.join(", ");

	let kind = attr_str(gradient, "type").unwrap_or_else(|| "linear".to_string());
	let css = match sanitize_css_value(&kind).as_str() {
		"radial" => format!("radial-gradient(circle, {})", stops),
		"conic" => format!("conic-gradient({})", stops),
		_ => {
			// 0 counts as unset, so the direction applies
			let angle = gradient
				.get("angle")
				.and_then(parse_number)
				.filter(|angle| *angle != 0.0);
			let direction = match angle {
				Some(angle) => format!("{}deg", format_number(angle)),
				None => attr_str(gradient, "direction")
					.map(|direction| sanitize_css_value(&direction))
					.filter(|direction| !direction.is_empty())
					.unwrap_or_else(|| "to bottom".to_string()),
			};
			format!("linear-gradient({}, {})", direction, stops)
		}
	};
	Some(css)
}

fn gradient_stop(stop: &Attrs) -> Option<String> {
	let color = sanitize_css_value(&attr_str(stop, "color")?);
	if color.is_empty() {
		return None;
	}
	let position = attr_str(stop, "position")
		.map(|position| sanitize_css_value(&position).trim_end_matches('%').to_string())
		.filter(|position| !position.is_empty());
	Some(match position {
		Some(position) => format!("{} {}%", color, position),
		None => color,
	})
}

fn url(value: &str) -> String {
	format!("url({})", sanitize_css_value(value))
}

fn image_declarations(image: &Attrs, rule: &mut Rule) {
	let Some(image_url) = attr_str(image, "url") else {
		return;
	};
	rule.push("background-image", &url(&image_url));

	let size = match attr_str(image, "size").as_deref() {
		Some("custom") => attr_str(image, "size_custom"),
		other => other.map(str::to_string),
	};
	if let Some(size) = size {
		rule.push("background-size", &size);
	}

	let position = match attr_str(image, "position").as_deref() {
		Some("custom") => {
			let x = attr_str(image, "position_x").unwrap_or_else(|| "50".to_string());
			let y = attr_str(image, "position_y").unwrap_or_else(|| "50".to_string());
			Some(format!("{}% {}%", x.trim_end_matches('%'), y.trim_end_matches('%')))
		}
		other => other.map(str::to_string),
	};
	if let Some(position) = position {
		rule.push("background-position", &position);
	}
	if let Some(repeat) = attr_str(image, "repeat") {
		rule.push("background-repeat", &repeat);
	}
	if let Some(attachment) = attr_str(image, "attachment") {
		rule.push("background-attachment", &attachment);
	}
}

fn video_declarations(video: &Attrs, rule: &mut Rule) {
	if let Some(poster) = attr_str(video, "poster") {
		rule.push("background-image", &url(&poster));
		rule.push_static("background-size", "cover");
		rule.push_static("background-position", "center center");
	}
}

/// Declarations for one background structure into `rule`
pub fn background_declarations(background: &Attrs, rule: &mut Rule) {
	let kind = attr_str(background, "type").unwrap_or_default();
	match kind.as_str() {
		"color" => {
			if let Some(color) = attr_str(background, "color") {
				rule.push("background-color", &color);
			}
		}
		"gradient" => {
			if let Some(gradient) = attr_object(background, "gradient").and_then(gradient_css) {
				rule.push("background", &gradient);
			}
		}
		"image" => {
			if let Some(image) = attr_object(background, "image") {
				image_declarations(image, rule);
			}
		}
		"video" => {
			if let Some(video) = attr_object(background, "video") {
				video_declarations(video, rule);
			}
		}
		_ => {}
	}
}

fn overlay_enabled(background: &Attrs) -> Option<String> {
	let kind = attr_str(background, "type").unwrap_or_default();
	if kind != "image" && kind != "video" {
		return None;
	}
	let overlay = attr_object(background, "overlay")?;
	if !attr_flag(overlay, "enabled") {
		return None;
	}
	Some(attr_str(overlay, "color").unwrap_or_else(|| "rgba(0,0,0,0.5)".to_string()))
}

/// Declarations of a variant that the base rule does not already carry.
///
/// When the variant switches type, an inherited base image is cleared.
fn variant_declarations(base: &Attrs, base_rule: &Rule, background: &Attrs) -> Vec<(String, String)> {
	let mut rule = Rule::new(base_rule.selector.as_str());
	background_declarations(background, &mut rule);
	let declares_image = |rule: &Rule| {
		rule.declarations
			.iter()
			.any(|(property, _)| property == "background" || property == "background-image")
	};
	let switched = attr_str(base, "type") != attr_str(background, "type");
	if switched && declares_image(base_rule) && !declares_image(&rule) {
		rule.push_static("background-image", "none");
	}
	rule.declarations
		.into_iter()
		.filter(|declaration| !base_rule.declarations.contains(declaration))
		.collect()
}

/// Compile background CSS including variants and the overlay
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let Some(base) = attrs.get("background").and_then(Value::as_object) else {
		return String::new();
	};
	let mut css = ResponsiveCss::new();
	let mut base_rule = Rule::new(selector);
	background_declarations(base, &mut base_rule);
	if !base_rule.is_empty() {
		css.rule(Breakpoint::Desktop, selector)
			.declarations
			.extend(base_rule.declarations.iter().cloned());
	}

	let base_value = Value::Object(base.clone());
	for variant in StyleVariant::ALL.into_iter().filter(|variant| !variant.is_base()) {
		let Some(overlay) = attrs.get(&variant.key("background")).filter(|value| value.is_object()) else {
			continue;
		};
		let merged = merge_structured(&base_value, overlay);
		let Some(background) = merged.as_object() else {
			continue;
		};
		let declarations = variant_declarations(base, &base_rule, background);
		if !declarations.is_empty() {
			css.rule(variant.breakpoint(), &variant.selector(selector))
				.declarations
				.extend(declarations);
		}
	}

	let mut text = css.to_css(&ctx.breakpoints);
	if let Some(color) = overlay_enabled(base) {
		let mut relative = Rule::new(selector);
		relative.push_static("position", "relative");
		let mut before = Rule::new(format!("{}::before", selector));
		before
			.push_static("content", "''")
			.push_static("position", "absolute")
			.push_static("top", "0")
			.push_static("left", "0")
			.push_static("right", "0")
			.push_static("bottom", "0")
			.push("background", &color)
			.push_static("pointer-events", "none");
		text.push_str(&relative.to_css());
		text.push_str(&before.to_css());
	}
	text
}

/// Video background settings needed to emit the `<video>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoBackground {
	/// Video source URL
	pub url: String,
	/// Poster image URL
	pub poster: Option<String>,
	/// Loop playback
	pub looped: bool,
	/// Start muted
	pub muted: bool,
	/// Start automatically
	pub autoplay: bool,
}

/// Video settings when the background is a video with a source URL
pub fn video_background(attrs: &Attrs) -> Option<VideoBackground> {
	let background = attr_object(attrs, "background")?;
	if attr_str(background, "type").as_deref() != Some("video") {
		return None;
	}
	let video = attr_object(background, "video")?;
	let flag = |key: &str| video.get(key).is_none_or(value_flag);
	Some(VideoBackground {
		url: video.get("url").and_then(value_str)?,
		poster: attr_str(video, "poster"),
		looped: flag("loop"),
		muted: flag("muted"),
		autoplay: flag("autoplay"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resolver::resolve;
	use crate::schema::FieldSchema;
	use rstest::rstest;

	fn resolved(background: Value) -> Attrs {
		let schema = FieldSchema::new().fields(fields());
		let explicit = json!({"background": background});
		resolve(&schema, &Attrs::new(), explicit.as_object().unwrap()).attrs
	}

	fn compile_bg(background: Value) -> String {
		compile(&resolved(background), ".b", &StyleContext::default())
	}

	#[rstest]
	fn test_linear_gradient_with_direction() {
		let gradient = json!({
			"type": "linear",
			"direction": "to bottom",
			"stops": [{"color": "#fff", "position": "0"}, {"color": "#000", "position": "100"}]
		});

		let css = gradient_css(gradient.as_object().unwrap());

		assert_eq!(css.as_deref(), Some("linear-gradient(to bottom, #fff 0%, #000 100%)"));
	}

	#[rstest]
	#[case(json!({"type": "linear", "angle": "45"}), "linear-gradient(45deg, #ffffff 0%, #000000 100%)")]
	#[case(json!({"type": "linear", "angle": "steep", "direction": "to right"}), "linear-gradient(to right, #ffffff 0%, #000000 100%)")]
	#[case(json!({"type": "linear", "angle": "0", "direction": "to right"}), "linear-gradient(to right, #ffffff 0%, #000000 100%)")]
	#[case(json!({"type": "linear", "angle": 90}), "linear-gradient(90deg, #ffffff 0%, #000000 100%)")]
	#[case(json!({"type": "radial"}), "radial-gradient(circle, #ffffff 0%, #000000 100%)")]
	#[case(json!({"type": "conic"}), "conic-gradient(#ffffff 0%, #000000 100%)")]
	fn test_gradient_types(#[case] gradient: Value, #[case] expected: &str) {
		let css = compile_bg(json!({"type": "gradient", "gradient": gradient}));

		assert_eq!(css, format!(".b {{\n    background: {};\n}}\n", expected));
	}

	#[rstest]
	fn test_gradient_stops_sanitized() {
		let css = compile_bg(json!({
			"type": "gradient",
			"gradient": {"stops": [{"color": "red;}", "position": "10%"}, {"color": "", "position": "50"}]}
		}));

		assert!(css.contains("background: linear-gradient(to bottom, red 10%);"));
	}

	#[rstest]
	fn test_color_type() {
		assert_eq!(compile_bg(json!({"type": "color", "color": "#f00"})), ".b {\n    background-color: #f00;\n}\n");
		assert_eq!(compile_bg(json!({"type": "", "color": "#f00"})), "");
	}

	#[rstest]
	fn test_image_defaults() {
		let css = compile_bg(json!({"type": "image", "image": {"url": "/a.jpg"}}));

		assert_eq!(
			css,
			".b {\n    background-image: url(/a.jpg);\n    background-size: cover;\n    background-position: center center;\n    background-repeat: no-repeat;\n    background-attachment: scroll;\n}\n"
		);
	}

	#[rstest]
	fn test_image_custom_modes() {
		let css = compile_bg(json!({"type": "image", "image": {
			"url": "/a.jpg", "size": "custom", "size_custom": "200px auto",
			"position": "custom", "position_x": "20", "position_y": "80"
		}}));

		assert!(css.contains("background-size: 200px auto;"));
		assert!(css.contains("background-position: 20% 80%;"));
	}

	#[rstest]
	fn test_image_without_url_emits_nothing() {
		assert_eq!(compile_bg(json!({"type": "image"})), "");
	}

	#[rstest]
	fn test_video_poster_and_overlay() {
		// Arrange
		let background = json!({
			"type": "video",
			"video": {"url": "/v.mp4", "poster": "/p.jpg"},
			"overlay": {"enabled": true}
		});

		// Act
		let css = compile_bg(background);

		// Assert
		assert!(css.contains("background-image: url(/p.jpg);"));
		assert!(css.contains("background-size: cover;"));
		assert!(css.contains("background-position: center center;"));
		assert!(css.contains(".b {\n    position: relative;\n}\n"));
		assert!(css.contains(".b::before {\n    content: '';"));
		assert!(css.contains("background: rgba(0,0,0,0.5);"));
		assert!(css.contains("pointer-events: none;"));
	}

	#[rstest]
	fn test_overlay_ignored_for_color() {
		let css = compile_bg(json!({"type": "color", "color": "#000", "overlay": {"enabled": true}}));

		assert!(!css.contains("::before"));
	}

	#[rstest]
	fn test_hover_and_responsive_variants() {
		let mut attrs = resolved(json!({"type": "color", "color": "#fff"}));
		attrs.insert("background__hover".into(), json!({"color": "#eee"}));
		attrs.insert("background__phone".into(), json!({"color": "#ddd"}));

		let css = compile(&attrs, ".b", &StyleContext::default());

		assert!(css.contains(".b:hover {\n    background-color: #eee;\n}\n"));
		assert!(css.contains("@media (max-width: 767px) {\n.b {\n    background-color: #ddd;\n}\n}\n"));
	}

	#[rstest]
	fn test_video_background_settings() {
		let attrs = resolved(json!({"type": "video", "video": {"url": "/v.mp4", "loop": false}}));

		let video = video_background(&attrs).unwrap();

		assert_eq!(video.url, "/v.mp4");
		assert!(!video.looped);
		assert!(video.muted && video.autoplay);
		assert_eq!(video.poster, None);
	}

	#[rstest]
	fn test_variant_emits_only_changed_declarations() {
		// Arrange
		let mut attrs = resolved(json!({"type": "image", "image": {"url": "/a.jpg"}}));
		attrs.insert("background__phone".into(), json!({"image": {"size": "contain"}}));
		attrs.insert("background__tablet".into(), json!({"image": {"size": "cover"}}));

		// Act
		let css = compile(&attrs, ".b", &StyleContext::default());

		// Assert
		assert_eq!(
			css,
			concat!(
				".b {\n    background-image: url(/a.jpg);\n    background-size: cover;\n",
				"    background-position: center center;\n    background-repeat: no-repeat;\n",
				"    background-attachment: scroll;\n}\n",
				"@media (max-width: 767px) {\n.b {\n    background-size: contain;\n}\n}\n",
			)
		);
	}

	#[rstest]
	fn test_variant_switching_type_clears_base_image() {
		let mut attrs = resolved(json!({"type": "gradient"}));
		attrs.insert("background__hover".into(), json!({"type": "color", "color": "#123456"}));

		let css = compile(&attrs, ".b", &StyleContext::default());

		assert!(css.contains(".b:hover {\n    background-color: #123456;\n    background-image: none;\n}\n"));
	}
}
