//! Heading module

use pagewright_style::prelude::*;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

const LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("text_color", "color").selector(".{prefix}-heading").hover(),
	StyleDescriptor::new("font_size", "font-size")
		.selector(".{prefix}-heading")
		.unit("px")
		.responsive(),
	StyleDescriptor::new("font_weight", "font-weight").selector(".{prefix}-heading"),
	StyleDescriptor::new("letter_spacing", "letter-spacing")
		.selector(".{prefix}-heading")
		.unit("px"),
	StyleDescriptor::new("text_align", "text-align").responsive(),
];

/// Section heading, `h1` to `h6`
#[derive(Debug, Clone)]
pub struct HeadingModule {
	schema: FieldSchema,
}

impl HeadingModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[
					FieldSpec::text("text").default("Heading"),
					FieldSpec::select("level").default("h2"),
					FieldSpec::text("link_url"),
				],
			),
		}
	}
}

impl Default for HeadingModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for HeadingModule {
	fn label(&self) -> &str {
		"Heading"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		let requested = attrs.string("level").unwrap_or_default().to_ascii_lowercase();
		let level = LEVELS
			.iter()
			.find(|level| **level == requested)
			.copied()
			.unwrap_or("h2");
		let text = attrs.html("text");
		let body = match attrs.string("link_url") {
			Some(_) => format!("<a href=\"{}\">{}</a>", attrs.url("link_url", "#"), text),
			None => text,
		};
		format!(
			"<{level} class=\"{}\">{}</{level}>",
			attrs.class("heading"),
			body,
			level = level
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	fn render(attrs: Value) -> String {
		let module = HeadingModule::new();
		let resolved = resolve(module.schema(), &Attrs::new(), attrs.as_object().unwrap());
		module.render(&ModuleAttrs::new(&resolved.attrs, module.schema(), "pw"), "")
	}

	#[rstest]
	#[case(json!({}), "<h2 class=\"pw-heading\">Heading</h2>")]
	#[case(json!({"text": "Title", "level": "H1"}), "<h1 class=\"pw-heading\">Title</h1>")]
	#[case(json!({"text": "T", "level": "h9"}), "<h2 class=\"pw-heading\">T</h2>")]
	#[case(json!({"text": "T", "link_url": "/a?b=1&c=2"}), "<h2 class=\"pw-heading\"><a href=\"/a?b=1&amp;c=2\">T</a></h2>")]
	fn test_render(#[case] attrs: Value, #[case] expected: &str) {
		assert_eq!(render(attrs), expected);
	}
}
