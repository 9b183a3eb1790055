//! Accordion and accordion item modules
//!
//! The accordion is a container; its items are nested module children
//! rendered as `<details>` elements, so toggling needs no script.

use pagewright_style::prelude::*;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

/// Families available to child items
pub(crate) const ITEM_USES: StyleUses = StyleUses {
	use_background: true,
	use_spacing: true,
	..StyleUses::NONE
};

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("title_color", "color")
		.selector(".{prefix}-accordion-title")
		.hover(),
	StyleDescriptor::new("title_bg_color", "background-color")
		.selector(".{prefix}-accordion-title")
		.hover(),
	StyleDescriptor::new("content_color", "color").selector(".{prefix}-accordion-content"),
	StyleDescriptor::new("item_gap", "margin-bottom")
		.selector(".{prefix}-accordion-item")
		.unit("px")
		.responsive(),
];

/// Collapsible list of items
#[derive(Debug, Clone)]
pub struct AccordionModule {
	schema: FieldSchema,
}

impl AccordionModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[FieldSpec::toggle("open_first").default(true)],
			),
		}
	}
}

impl Default for AccordionModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for AccordionModule {
	fn label(&self) -> &str {
		"Accordion"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn style_descriptors(&self) -> &[StyleDescriptor] {
		DESCRIPTORS
	}

	fn accepts_children(&self) -> bool {
		true
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, inner_html: &str) -> String {
		format!(
			"<div class=\"{}\" data-{}-open-first=\"{}\">{}</div>",
			attrs.class("accordion"),
			attrs.class_prefix(),
			attrs.flag("open_first"),
			inner_html
		)
	}
}

/// One collapsible entry of an accordion
#[derive(Debug, Clone)]
pub struct AccordionItemModule {
	schema: FieldSchema,
}

impl AccordionItemModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				ITEM_USES,
				&[],
				[
					FieldSpec::text("title").default("Accordion Item"),
					FieldSpec::text("content").default(""),
					FieldSpec::toggle("open").default(false),
				],
			),
		}
	}
}

impl Default for AccordionItemModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for AccordionItemModule {
	fn label(&self) -> &str {
		"Accordion Item"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn uses(&self) -> StyleUses {
		ITEM_USES
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		let open = if attrs.flag("open") { " open" } else { "" };
		format!(
			"<details class=\"{}\"{}><summary class=\"{}\">{}</summary><div class=\"{}\">{}</div></details>",
			attrs.class("accordion-item"),
			open,
			attrs.class("accordion-title"),
			attrs.html("title"),
			attrs.class("accordion-content"),
			attrs.html("content")
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_accordion_wraps_items() {
		let module = AccordionModule::new();
		let resolved = resolve(module.schema(), &Attrs::new(), &Attrs::new());

		let html = module.render(&ModuleAttrs::new(&resolved.attrs, module.schema(), "pw"), "<details></details>");

		assert_eq!(
			html,
			"<div class=\"pw-accordion\" data-pw-open-first=\"true\"><details></details></div>"
		);
		assert!(module.accepts_children());
	}

	#[rstest]
	fn test_item_render() {
		// Arrange
		let module = AccordionItemModule::new();
		let explicit = json!({"title": "Q & A", "content": "Answer", "open": "1"});
		let resolved = resolve(module.schema(), &Attrs::new(), explicit.as_object().unwrap());

		// Act
		let html = module.render(&ModuleAttrs::new(&resolved.attrs, module.schema(), "pw"), "");

		// Assert
		assert_eq!(
			html,
			"<details class=\"pw-accordion-item\" open><summary class=\"pw-accordion-title\">Q &amp; A</summary><div class=\"pw-accordion-content\">Answer</div></details>"
		);
	}

	#[rstest]
	fn test_item_schema_limited_to_spacing_and_background() {
		let schema = AccordionItemModule::new().schema().clone();

		assert!(schema.get("margin").is_some());
		assert!(schema.get("background").is_some());
		assert!(schema.get("animation").is_none());
		assert!(schema.get("width").is_none());
	}
}
