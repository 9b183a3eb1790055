//! Tabs and tab modules

use pagewright_style::prelude::*;

use super::accordion::ITEM_USES;
use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

const DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("tab_title_color", "color")
		.selector(".{prefix}-tab-title")
		.hover(),
	StyleDescriptor::new("tab_title_bg_color", "background-color").selector(".{prefix}-tab-title"),
	StyleDescriptor::new("tab_content_bg_color", "background-color").selector(".{prefix}-tab-content"),
];

/// Tab container
#[derive(Debug, Clone)]
pub struct TabsModule {
	schema: FieldSchema,
}

impl TabsModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				StyleUses::ALL,
				DESCRIPTORS,
				[FieldSpec::number("active_tab").default(1).range(1.0, 50.0)],
			),
		}
	}
}

impl Default for TabsModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for TabsModule {
	fn label(&self) -> &str {
		"Tabs"
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
		let active = attrs.attribute("active_tab");
		format!(
			"<div class=\"{}\" data-{}-active-tab=\"{}\">{}</div>",
			attrs.class("tabs"),
			attrs.class_prefix(),
			if active.is_empty() { "1".to_string() } else { active },
			inner_html
		)
	}
}

/// One panel of a tab container
#[derive(Debug, Clone)]
pub struct TabModule {
	schema: FieldSchema,
}

impl TabModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		Self {
			schema: module_schema(
				ITEM_USES,
				&[],
				[
					FieldSpec::text("title").default("Tab"),
					FieldSpec::text("content").default(""),
				],
			),
		}
	}
}

impl Default for TabModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for TabModule {
	fn label(&self) -> &str {
		"Tab"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn uses(&self) -> StyleUses {
		ITEM_USES
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		format!(
			"<div class=\"{}\" role=\"tabpanel\"><div class=\"{}\">{}</div><div class=\"{}\">{}</div></div>",
			attrs.class("tab"),
			attrs.class("tab-title"),
			attrs.html("title"),
			attrs.class("tab-content"),
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
	fn test_active_tab_clamped() {
		// Arrange
		let module = TabsModule::new();
		let explicit = json!({"active_tab": "80"});

		// Act
		let resolved = resolve(module.schema(), &Attrs::new(), explicit.as_object().unwrap());
		let html = module.render(&ModuleAttrs::new(&resolved.attrs, module.schema(), "pw"), "<i></i>");

		// Assert
		assert_eq!(resolved.warnings.len(), 1);
		assert_eq!(html, "<div class=\"pw-tabs\" data-pw-active-tab=\"50\"><i></i></div>");
	}

	#[rstest]
	fn test_tab_render() {
		let module = TabModule::new();
		let resolved = resolve(module.schema(), &Attrs::new(), &Attrs::new());

		let html = module.render(&ModuleAttrs::new(&resolved.attrs, module.schema(), "ui"), "");

		assert_eq!(
			html,
			"<div class=\"ui-tab\" role=\"tabpanel\"><div class=\"ui-tab-title\">Tab</div><div class=\"ui-tab-content\"></div></div>"
		);
		assert!(!module.accepts_children());
	}
}
