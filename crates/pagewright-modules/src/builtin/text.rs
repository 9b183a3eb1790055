//! Text module
//!
//! Plain text split into paragraphs on blank lines; single newlines become
//! line breaks.

use pagewright_style::prelude::*;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("text_color", "color").hover(),
	StyleDescriptor::new("font_size", "font-size").unit("px").responsive(),
	StyleDescriptor::new("line_height", "line-height").responsive(),
	StyleDescriptor::new("text_align", "text-align").responsive(),
];

/// Paragraph text
#[derive(Debug, Clone)]
pub struct TextModule {
	schema: FieldSchema,
}

impl TextModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(StyleUses::ALL, DESCRIPTORS, [FieldSpec::text("content").default("")]),
		}
	}
}

impl Default for TextModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for TextModule {
	fn label(&self) -> &str {
		"Text"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		let content = attrs.html("content").replace("\r\n", "\n");
		let paragraphs: String = content
			.split("\n\n")
			.map(str::trim)
			.filter(|paragraph| !paragraph.is_empty())
			.map(|paragraph| format!("<p>{}</p>", paragraph.replace('\n', "<br>")))
			.collect();
		format!("<div class=\"{}\">{}</div>", attrs.class("text"), paragraphs)
	}
}
