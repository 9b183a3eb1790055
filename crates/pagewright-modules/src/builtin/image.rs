//! Image module

use pagewright_style::prelude::*;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};
use crate::html::attribute;

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("image_max_width", "max-width")
		.selector("img")
		.unit("%")
		.responsive(),
	StyleDescriptor::new("image_border_radius", "border-radius")
		.selector("img")
		.unit("px"),
	StyleDescriptor::new("image_alignment", "text-align").responsive(),
];

/// Single image, optionally linked
#[derive(Debug, Clone)]
pub struct ImageModule {
	schema: FieldSchema,
}

impl ImageModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[
					FieldSpec::text("src"),
					FieldSpec::text("alt").default(""),
					FieldSpec::text("title"),
					FieldSpec::text("link_url"),
				],
			),
		}
	}
}

impl Default for ImageModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for ImageModule {
	fn label(&self) -> &str {
		"Image"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		let src = attrs.url("src", "");
		if src.is_empty() {
			return String::new();
		}
		let mut img = format!(
			"<img class=\"{}\" src=\"{}\" alt=\"{}\"",
			attrs.class("image"),
			src,
			attrs.attribute("alt")
		);
		if let Some(title) = attrs.string("title") {
			img.push_str(&attribute("title", &title));
		}
		img.push_str(" loading=\"lazy\">");
		match attrs.string("link_url") {
			Some(_) => format!("<a href=\"{}\">{}</a>", attrs.url("link_url", "#"), img),
			None => img,
		}
	}
}
