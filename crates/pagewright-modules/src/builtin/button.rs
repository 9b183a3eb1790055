//! Button module

use pagewright_style::prelude::*;
use serde_json::json;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("button_bg_color", "background-color")
		.selector(".{prefix}-button")
		.hover(),
	StyleDescriptor::new("button_text_color", "color")
		.selector(".{prefix}-button")
		.hover(),
	StyleDescriptor::new("button_border_radius", "border-radius")
		.selector(".{prefix}-button")
		.unit("px"),
	StyleDescriptor::new("button_font_size", "font-size")
		.selector(".{prefix}-button")
		.unit("px")
		.responsive(),
	StyleDescriptor::new("button_alignment", "text-align").responsive(),
];

/// Call-to-action link styled as a button
#[derive(Debug, Clone)]
pub struct ButtonModule {
	schema: FieldSchema,
}

impl ButtonModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[
					FieldSpec::text("text").default("Click Here"),
					FieldSpec::text("link_url").default("#"),
					FieldSpec::select("link_target").default("_self"),
				],
			),
		}
	}
}

impl Default for ButtonModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for ButtonModule {
	fn label(&self) -> &str {
		"Button"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn default_style_values(&self) -> Attrs {
		let defaults = json!({
			"button_bg_color": "#2ea3f2",
			"button_text_color": "#ffffff",
			"button_border_radius": "3",
		});
		defaults.as_object().cloned().unwrap_or_default()
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		let target = match attrs.string("link_target").as_deref() {
			Some("_blank") => " target=\"_blank\" rel=\"noopener noreferrer\"",
			_ => "",
		};
		format!(
			"<a class=\"{}\" href=\"{}\"{}>{}</a>",
			attrs.class("button"),
			attrs.url("link_url", "#"),
			target,
			attrs.html("text")
		)
	}
}
