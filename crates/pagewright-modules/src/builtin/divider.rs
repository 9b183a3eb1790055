//! Divider module

use pagewright_style::prelude::*;
use serde_json::json;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("divider_color", "border-top-color").selector(".{prefix}-divider"),
	StyleDescriptor::new("divider_style", "border-top-style").selector(".{prefix}-divider"),
	StyleDescriptor::new("divider_weight", "border-top-width")
		.selector(".{prefix}-divider")
		.unit("px"),
	StyleDescriptor::new("divider_width", "width")
		.selector(".{prefix}-divider")
		.unit("%")
		.responsive(),
];

/// Horizontal rule
#[derive(Debug, Clone)]
pub struct DividerModule {
	schema: FieldSchema,
}

impl DividerModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[FieldSpec::toggle("show_divider").default(true)],
			),
		}
	}
}

impl Default for DividerModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for DividerModule {
	fn label(&self) -> &str {
		"Divider"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn default_style_values(&self) -> Attrs {
		let defaults = json!({
			"divider_color": "#dddddd",
			"divider_style": "solid",
			"divider_weight": "1",
		});
		defaults.as_object().cloned().unwrap_or_default()
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		if attrs.flag("show_divider") {
			format!("<hr class=\"{}\">", attrs.class("divider"))
		} else {
			String::new()
		}
	}
}
