//! Declarative per-module style tables
//!
//! Modules describe their own style fields as [`StyleDescriptor`] rows
//! instead of writing CSS by hand. One generic compiler turns the table into
//! rules, honouring units, responsive variants and hover variants.
//!
//! `{prefix}` inside a sub-selector expands to the render's class prefix.

use super::StyleContext;
use crate::breakpoint::{Breakpoint, HOVER_SUFFIX};
use crate::css::ResponsiveCss;
use crate::sanitize::sanitize_css_value;
use crate::schema::FieldSpec;
use crate::units::format_length;
use crate::value::{Attrs, attr_str};

/// Maps one attribute to one CSS property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
	/// Attribute key
	pub attr: &'static str,
	/// CSS property
	pub property: &'static str,
	/// Descendant selector appended to the node selector
	pub selector: Option<&'static str>,
	/// Unit appended to numeric values
	pub unit: Option<&'static str>,
	/// Read `__tablet` / `__phone` variants
	pub responsive: bool,
	/// Read a `__hover` variant
	pub hover: bool,
}

impl StyleDescriptor {
	/// Map `attr` to `property` on the node itself
	pub const fn new(attr: &'static str, property: &'static str) -> Self {
		Self {
			attr,
			property,
			selector: None,
			unit: None,
			responsive: false,
			hover: false,
		}
	}

	/// Target a descendant of the node
	pub const fn selector(mut self, selector: &'static str) -> Self {
		self.selector = Some(selector);
		self
	}

	/// Append `unit` to numeric values
	pub const fn unit(mut self, unit: &'static str) -> Self {
		self.unit = Some(unit);
		self
	}

	/// Read responsive variants
	pub const fn responsive(mut self) -> Self {
		self.responsive = true;
		self
	}

	/// Read the hover variant
	pub const fn hover(mut self) -> Self {
		self.hover = true;
		self
	}

	fn format(&self, value: &str) -> Option<String> {
		match self.unit {
			Some(unit) => format_length(value, unit),
			None => Some(sanitize_css_value(value)).filter(|value| !value.is_empty()),
		}
	}

	fn target(&self, selector: &str, ctx: &StyleContext) -> String {
		match self.selector {
			Some(sub) => format!("{} {}", selector, expand_prefix(sub, ctx)),
			None => selector.to_string(),
		}
	}

	fn hover_target(&self, selector: &str, ctx: &StyleContext) -> String {
		match self.selector {
			Some(sub) => format!("{}:hover {}", selector, expand_prefix(sub, ctx)),
			None => format!("{}:hover", selector),
		}
	}

	/// Schema entry for the attribute this descriptor reads
	pub fn field(&self) -> FieldSpec {
		let mut field = FieldSpec::text(self.attr);
		if self.responsive {
			field = field.responsive();
		}
		if self.hover {
			field = field.hover();
		}
		field
	}
}

fn expand_prefix(sub: &str, ctx: &StyleContext) -> String {
	sub.replace("{prefix}", &ctx.class_prefix)
}

/// Compile a descriptor table for `selector`
pub fn compile(
	descriptors: &[StyleDescriptor],
	attrs: &Attrs,
	selector: &str,
	ctx: &StyleContext,
) -> String {
	let mut css = ResponsiveCss::new();
	for descriptor in descriptors {
		let breakpoints: &[Breakpoint] = if descriptor.responsive {
			&Breakpoint::ALL
		} else {
			&[Breakpoint::Desktop]
		};
		for breakpoint in breakpoints {
			let formatted = attr_str(attrs, &breakpoint.key(descriptor.attr))
				.and_then(|value| descriptor.format(&value));
			if let Some(formatted) = formatted {
				css.rule(*breakpoint, &descriptor.target(selector, ctx))
					.push(descriptor.property, &formatted);
			}
		}
		if descriptor.hover {
			let key = format!("{}{}", descriptor.attr, HOVER_SUFFIX);
			let formatted = attr_str(attrs, &key).and_then(|value| descriptor.format(&value));
			if let Some(formatted) = formatted {
				css.rule(Breakpoint::Desktop, &descriptor.hover_target(selector, ctx))
					.push(descriptor.property, &formatted);
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

	const TABLE: &[StyleDescriptor] = &[
		StyleDescriptor::new("text_color", "color").selector(".{prefix}-btn").hover(),
		StyleDescriptor::new("font_size", "font-size").selector(".{prefix}-btn").unit("px").responsive(),
		StyleDescriptor::new("align", "text-align").responsive(),
	];

	#[rstest]
	fn test_descriptor_table() {
		// Arrange
		let attrs = json!({
			"text_color": "#fff",
			"text_color__hover": "#000",
			"font_size": "18",
			"font_size__phone": "14",
			"align": "center",
			"align__tablet": "left",
		});

		// Act
		let css = compile(TABLE, attrs.as_object().unwrap(), ".m", &StyleContext::new("ui"));

		// Assert
		assert_eq!(
			css,
			concat!(
				".m .ui-btn {\n    color: #fff;\n    font-size: 18px;\n}\n",
				".m:hover .ui-btn {\n    color: #000;\n}\n",
				".m {\n    text-align: center;\n}\n",
				"@media (max-width: 980px) {\n.m {\n    text-align: left;\n}\n}\n",
				"@media (max-width: 767px) {\n.m .ui-btn {\n    font-size: 14px;\n}\n}\n",
			)
		);
	}

	#[rstest]
	fn test_non_responsive_descriptor_ignores_variants() {
		let attrs = json!({"text_color__phone": "red"});

		let css = compile(TABLE, attrs.as_object().unwrap(), ".m", &StyleContext::default());

		assert_eq!(css, "");
	}

	#[rstest]
	fn test_field_mirrors_descriptor_flags() {
		let field = TABLE[1].field();

		assert_eq!(field.name, "font_size");
		assert!(field.responsive);
		assert!(!field.hover);
	}
}
