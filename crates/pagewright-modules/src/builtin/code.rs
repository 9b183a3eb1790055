//! Raw code module
//!
//! `content` is emitted verbatim, so authors can embed arbitrary markup.

use pagewright_style::prelude::*;

use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};

/// Verbatim HTML block
#[derive(Debug, Clone)]
pub struct CodeModule {
	schema: FieldSchema,
}

impl CodeModule {
	/// Create the module with its schema
	pub fn new() -> Self {
		let uses = Self::USES;
		Self {
			schema: module_schema(uses, &[], [FieldSpec::raw("content").default("")]),
		}
	}

	const USES: StyleUses = StyleUses {
		use_animation: false,
		use_motion: false,
		..StyleUses::ALL
	};
}

impl Default for CodeModule {
	fn default() -> Self {
		Self::new()
	}
}

impl ModuleCapability for CodeModule {
	fn label(&self) -> &str {
		"Code"
	}

	fn schema(&self) -> &FieldSchema {
		&self.schema
	}

	fn uses(&self) -> StyleUses {
		Self::USES
	}

	fn render(&self, attrs: &ModuleAttrs<'_>, _inner_html: &str) -> String {
		format!("<div class=\"{}\">{}</div>", attrs.class("code"), attrs.html("content"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_content_passes_through() {
		let module = CodeModule::new();
		let attrs = json!({"content": "<script>track()</script>"});

		let html = module.render(&ModuleAttrs::new(attrs.as_object().unwrap(), module.schema(), "pw"), "");

		assert_eq!(html, "<div class=\"pw-code\"><script>track()</script></div>");
		assert!(module.schema().get("animation").is_none());
	}
}
