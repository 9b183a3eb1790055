//! Per-element custom declarations
//!
//! `main_element`, `before_module` and `after_module` hold free-form
//! declaration lists (`color: red; margin: 0`) applied to the element, its
//! `::before` and its `::after`. Each declaration is split into property and
//! value: the property must be a plain CSS identifier and the value goes
//! through the same sanitizer as every other family. Anything else is
//! dropped.

use super::StyleContext;
use crate::breakpoint::StyleVariant;
use crate::css::ResponsiveCss;
use crate::schema::FieldSpec;
use crate::value::{Attrs, attr_str};

/// `(attribute, pseudo-element suffix)` in emission order
const TARGETS: [(&str, &str); 3] = [
	("before_module", "::before"),
	("main_element", ""),
	("after_module", "::after"),
];

/// Fields: three declaration lists, responsive with hover
pub fn fields() -> Vec<FieldSpec> {
	TARGETS
		.iter()
		.map(|(attr, _)| FieldSpec::text(*attr).responsive().hover())
		.collect()
}

/// Whether `property` is a plain, optionally vendor-prefixed, CSS identifier
fn is_property(property: &str) -> bool {
	let name = property.strip_prefix('-').unwrap_or(property);
	name.starts_with(|c: char| c.is_ascii_alphabetic())
		&& name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// `(property, value)` pairs of a declaration list, invalid entries skipped
pub fn parse_declarations(text: &str) -> Vec<(String, String)> {
	text.split([';', '\n'])
		.filter(|declaration| !declaration.trim().is_empty())
		.filter_map(|declaration| {
			let Some((property, value)) = declaration.split_once(':') else {
				tracing::debug!(declaration, "dropping custom declaration without a colon");
				return None;
			};
			let property = property.trim().to_ascii_lowercase();
			if !is_property(&property) {
				tracing::debug!(%property, "dropping custom declaration with an invalid property");
				return None;
			}
			Some((property, value.trim().to_string()))
		})
		.collect()
}

/// Compile custom declarations for every breakpoint and hover
pub fn compile(attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
	let mut css = ResponsiveCss::new();
	for variant in StyleVariant::ALL {
		for (attr, pseudo) in TARGETS {
			let Some(text) = attr_str(attrs, &variant.key(attr)) else {
				continue;
			};
			let target = format!("{}{}", variant.selector(selector), pseudo);
			for (property, value) in parse_declarations(&text) {
				css.rule(variant.breakpoint(), &target).push(&property, &value);
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
		compile(attrs.as_object().unwrap(), ".e", &StyleContext::default())
	}

	#[rstest]
	fn test_targets_and_order() {
		// Arrange
		let attrs = json!({
			"main_element": "color: red;\n letter-spacing: 2px",
			"after_module": "display: block",
			"main_element__tablet": "color: blue",
		});

		// Act
		let css = compile_json(attrs);

		// Assert
		assert_eq!(
			css,
			concat!(
				".e {\n    color: red;\n    letter-spacing: 2px;\n}\n",
				".e::after {\n    display: block;\n}\n",
				"@media (max-width: 980px) {\n.e {\n    color: blue;\n}\n}\n",
			)
		);
	}

	#[rstest]
	fn test_hover_pseudo_element() {
		let css = compile_json(json!({"before_module__hover": "opacity: 1"}));

		assert_eq!(css, ".e:hover::before {\n    opacity: 1;\n}\n");
	}

	#[rstest]
	fn test_breakout_attempts_contained() {
		// Arrange
		let attrs = json!({"main_element": "color: red} body {display: none; } x {y: z; -webkit-filter: blur(2px)"});

		// Act
		let css = compile_json(attrs);

		// Assert
		assert_eq!(
			css,
			".e {\n    color: red body display: none;\n    -webkit-filter: blur(2px);\n}\n"
		);
	}

	#[rstest]
	#[case("color: red", vec![("color", "red")])]
	#[case("Margin-Top : 4px;;", vec![("margin-top", "4px")])]
	#[case("no colon; 1x: y; a b: c", vec![])]
	fn test_parse_declarations(#[case] text: &str, #[case] expected: Vec<(&str, &str)>) {
		let expected: Vec<(String, String)> = expected
			.into_iter()
			.map(|(p, v)| (p.to_string(), v.to_string()))
			.collect();

		assert_eq!(parse_declarations(text), expected);
	}
}
