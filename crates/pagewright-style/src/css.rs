//! CSS text building blocks
//!
//! [`Rule`] formats one selector block, [`ResponsiveCss`] groups rules by
//! breakpoint and [`StyleSheet`] accumulates the output of one render call.

use std::collections::BTreeSet;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::keyframes::keyframes_css;
use crate::sanitize::sanitize_css_value;

/// One selector block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
	/// Selector text
	pub selector: String,
	/// Ordered `(property, value)` pairs
	pub declarations: Vec<(String, String)>,
}

impl Rule {
	/// Empty rule for `selector`
	pub fn new(selector: impl Into<String>) -> Self {
		Self {
			selector: selector.into(),
			declarations: Vec::new(),
		}
	}

	/// Add a declaration, sanitizing the value. Blank values are skipped.
	pub fn push(&mut self, property: &str, value: &str) -> &mut Self {
		let value = sanitize_css_value(value);
		if !value.is_empty() {
			self.declarations.push((property.to_string(), value));
		}
		self
	}

	/// Add a declaration with a constant value that is emitted as-is
	pub fn push_static(&mut self, property: &str, value: &'static str) -> &mut Self {
		self.declarations.push((property.to_string(), value.to_string()));
		self
	}

	/// Builder form of [`Rule::push`]
	pub fn declare(mut self, property: &str, value: &str) -> Self {
		self.push(property, value);
		self
	}

	/// Whether the rule has no declarations
	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	/// Rule text, empty when there are no declarations
	pub fn to_css(&self) -> String {
		if self.is_empty() {
			return String::new();
		}
		let body = self
			.declarations
			.iter()
			.map(|(property, value)| format!("{}: {}", property, value))
			.collect::<Vec<_>>()
			.join(";\n    ");
		format!("{} {{\n    {};\n}}\n", self.selector, body)
	}
}

/// Wrap `body` in a media query, empty when `body` is empty
pub fn wrap_media_query(query: &str, body: &str) -> String {
	if body.is_empty() {
		String::new()
	} else {
		format!("{} {{\n{}}}\n", query, body)
	}
}

/// Rules grouped per breakpoint
#[derive(Debug, Clone, Default)]
pub struct ResponsiveCss {
	desktop: Vec<Rule>,
	tablet: Vec<Rule>,
	phone: Vec<Rule>,
}

impl ResponsiveCss {
	/// Empty rule set
	pub fn new() -> Self {
		Self::default()
	}

	fn bucket(&mut self, breakpoint: Breakpoint) -> &mut Vec<Rule> {
		match breakpoint {
			Breakpoint::Desktop => &mut self.desktop,
			Breakpoint::Tablet => &mut self.tablet,
			Breakpoint::Phone => &mut self.phone,
		}
	}

	/// Rule for `selector` at `breakpoint`, created on first use
	pub fn rule(&mut self, breakpoint: Breakpoint, selector: &str) -> &mut Rule {
		let bucket = self.bucket(breakpoint);
		let index = match bucket.iter().position(|rule| rule.selector == selector) {
			Some(index) => index,
			None => {
				bucket.push(Rule::new(selector));
				bucket.len() - 1
			}
		};
		&mut bucket[index]
	}

	/// Desktop rules, then the tablet and mobile media blocks
	pub fn to_css(&self, breakpoints: &Breakpoints) -> String {
		let mut css = String::new();
		for breakpoint in Breakpoint::ALL {
			let rules = match breakpoint {
				Breakpoint::Desktop => &self.desktop,
				Breakpoint::Tablet => &self.tablet,
				Breakpoint::Phone => &self.phone,
			};
			let body: String = rules.iter().map(Rule::to_css).collect();
			match breakpoints.media_query(breakpoint) {
				Some(query) => css.push_str(&wrap_media_query(&query, &body)),
				None => css.push_str(&body),
			}
		}
		css
	}
}

/// CSS accumulated during one render call
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
	chunks: Vec<String>,
	animations: BTreeSet<String>,
}

impl StyleSheet {
	/// Empty stylesheet
	pub fn new() -> Self {
		Self::default()
	}

	/// Append generated CSS, ignoring empty chunks
	pub fn push(&mut self, css: impl Into<String>) {
		let css = css.into();
		if !css.is_empty() {
			self.chunks.push(css);
		}
	}

	/// Record that an animation type is referenced
	pub fn use_animation(&mut self, animation_type: &str) {
		self.animations.insert(animation_type.to_string());
	}

	/// Animation types referenced so far
	pub fn animations(&self) -> impl Iterator<Item = &str> {
		self.animations.iter().map(String::as_str)
	}

	/// Whether nothing has been accumulated
	pub fn is_empty(&self) -> bool {
		self.chunks.is_empty() && self.animations.is_empty()
	}

	/// Concatenate chunks, followed by keyframes when `with_keyframes` is set
	pub fn finish(self, class_prefix: &str, with_keyframes: bool) -> String {
		let mut css = self.chunks.concat();
		if with_keyframes {
			for animation in &self.animations {
				if let Some(keyframes) = keyframes_css(class_prefix, animation) {
					css.push_str(&keyframes);
				}
			}
		}
		css
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_rule_format() {
		let rule = Rule::new(".a").declare("margin", "10px").declare("padding", "0");

		assert_eq!(rule.to_css(), ".a {\n    margin: 10px;\n    padding: 0;\n}\n");
	}

	#[rstest]
	fn test_rule_sanitizes_and_skips_blank() {
		let rule = Rule::new(".a").declare("color", "red;}").declare("margin", " ; ");

		assert_eq!(rule.declarations, vec![("color".to_string(), "red".to_string())]);
	}

	#[rstest]
	fn test_empty_rule_emits_nothing() {
		assert_eq!(Rule::new(".a").to_css(), "");
		assert_eq!(wrap_media_query("@media (max-width: 980px)", ""), "");
	}

	#[rstest]
	fn test_responsive_css_orders_breakpoints() {
		// Arrange
		let mut css = ResponsiveCss::new();
		css.rule(Breakpoint::Phone, ".a").push("width", "100%");
		css.rule(Breakpoint::Desktop, ".a").push("width", "50%");
		css.rule(Breakpoint::Desktop, ".a").push("height", "10px");

		// Act
		let text = css.to_css(&Breakpoints::default());

		// Assert
		assert_eq!(
			text,
			".a {\n    width: 50%;\n    height: 10px;\n}\n@media (max-width: 767px) {\n.a {\n    width: 100%;\n}\n}\n"
		);
		assert!(!text.contains("980px"));
	}

	#[rstest]
	fn test_stylesheet_appends_keyframes_once() {
		let mut sheet = StyleSheet::new();
		sheet.push(".a {\n    opacity: 0;\n}\n");
		sheet.push("");
		sheet.use_animation("fade");
		sheet.use_animation("fade");

		let css = sheet.finish("pw", true);

		assert_eq!(css.matches("@keyframes pw-fade ").count(), 1);
		assert!(css.starts_with(".a {"));
	}
}
