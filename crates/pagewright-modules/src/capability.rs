//! Module capability interface
//!
//! A capability is everything the renderer needs to know about one module
//! type: its field schema, default style values, which style families it
//! opts into, how to render its markup and how to compile its own CSS.

use pagewright_style::families::declarative::{self, StyleDescriptor};
use pagewright_style::prelude::*;
use pagewright_style::value::{value_flag, value_str};
use serde_json::Value;

use crate::html::{escape, safe_url};

/// Style families a module opts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleUses {
	/// Background family
	pub use_background: bool,
	/// Spacing family
	pub use_spacing: bool,
	/// Border family
	pub use_border: bool,
	/// Box shadow family
	pub use_box_shadow: bool,
	/// Sizing family
	pub use_sizing: bool,
	/// Position family
	pub use_position: bool,
	/// Overflow family
	pub use_overflow: bool,
	/// Animation family
	pub use_animation: bool,
	/// Motion family
	pub use_motion: bool,
	/// Custom declarations family
	pub use_custom_css: bool,
}

impl StyleUses {
	/// No families
	pub const NONE: StyleUses = StyleUses {
		use_background: false,
		use_spacing: false,
		use_border: false,
		use_box_shadow: false,
		use_sizing: false,
		use_position: false,
		use_overflow: false,
		use_animation: false,
		use_motion: false,
		use_custom_css: false,
	};

	/// Every family
	pub const ALL: StyleUses = StyleUses {
		use_background: true,
		use_spacing: true,
		use_border: true,
		use_box_shadow: true,
		use_sizing: true,
		use_position: true,
		use_overflow: true,
		use_animation: true,
		use_motion: true,
		use_custom_css: true,
	};

	/// Whether `family` is enabled
	pub fn uses(&self, family: StyleFamily) -> bool {
		match family {
			StyleFamily::Background => self.use_background,
			StyleFamily::Spacing => self.use_spacing,
			StyleFamily::Border => self.use_border,
			StyleFamily::BoxShadow => self.use_box_shadow,
			StyleFamily::CustomCss => self.use_custom_css,
			StyleFamily::Sizing => self.use_sizing,
			StyleFamily::Position => self.use_position,
			StyleFamily::Overflow => self.use_overflow,
			StyleFamily::Animation => self.use_animation,
			StyleFamily::Motion => self.use_motion,
		}
	}

	/// Enabled families in emission order
	pub fn families(&self) -> impl Iterator<Item = StyleFamily> + '_ {
		StyleFamily::ALL
			.into_iter()
			.filter(move |family| self.uses(*family))
	}

	/// Schema holding the fields of every enabled family
	pub fn schema(&self) -> FieldSchema {
		self.families()
			.fold(FieldSchema::new(), |schema, family| schema.family(family))
	}
}

/// Read-only view of resolved attributes handed to [`ModuleCapability::render`]
#[derive(Debug, Clone, Copy)]
pub struct ModuleAttrs<'a> {
	attrs: &'a Attrs,
	schema: &'a FieldSchema,
	class_prefix: &'a str,
}

impl<'a> ModuleAttrs<'a> {
	/// Wrap resolved attributes
	pub fn new(attrs: &'a Attrs, schema: &'a FieldSchema, class_prefix: &'a str) -> Self {
		Self {
			attrs,
			schema,
			class_prefix,
		}
	}

	/// Underlying map
	pub fn attrs(&self) -> &'a Attrs {
		self.attrs
	}

	/// Raw JSON value
	pub fn value(&self, key: &str) -> Option<&'a Value> {
		self.attrs.get(key)
	}

	/// Unescaped string value, for decisions rather than output
	pub fn string(&self, key: &str) -> Option<String> {
		self.attrs.get(key).and_then(value_str)
	}

	/// Truthiness of a toggle
	pub fn flag(&self, key: &str) -> bool {
		self.attrs.get(key).is_some_and(value_flag)
	}

	/// Value ready for element content.
	///
	/// Escaped, except for fields the schema declares raw, which are
	/// returned verbatim.
	pub fn html(&self, key: &str) -> String {
		let Some(value) = self.string(key) else {
			return String::new();
		};
		if self.schema.is_raw(key) {
			value
		} else {
			escape(&value).into_owned()
		}
	}

	/// Value ready for a quoted attribute, always escaped
	pub fn attribute(&self, key: &str) -> String {
		self.string(key)
			.map(|value| escape(&value).into_owned())
			.unwrap_or_default()
	}

	/// Escaped URL, replaced by `fallback` when its scheme is unsafe
	pub fn url(&self, key: &str, fallback: &str) -> String {
		let value = self.string(key).unwrap_or_default();
		escape(safe_url(value.trim(), fallback)).into_owned()
	}

	/// Prefixed class name
	pub fn class(&self, name: &str) -> String {
		format!("{}-{}", self.class_prefix, name)
	}

	/// Class prefix of the current render
	pub fn class_prefix(&self) -> &'a str {
		self.class_prefix
	}
}

/// Behaviour of one module type
pub trait ModuleCapability: Send + Sync {
	/// Human-readable name
	fn label(&self) -> &str;

	/// Fields this module knows, including its style families
	fn schema(&self) -> &FieldSchema;

	/// Style values layered between explicit attributes and schema defaults
	fn default_style_values(&self) -> Attrs {
		Attrs::new()
	}

	/// Style families compiled for this module
	fn uses(&self) -> StyleUses {
		StyleUses::ALL
	}

	/// Declarative style table compiled by the default [`generate_css`](Self::generate_css)
	fn style_descriptors(&self) -> &[StyleDescriptor] {
		&[]
	}

	/// Whether nested module children are rendered
	fn accepts_children(&self) -> bool {
		false
	}

	/// Module markup. `inner_html` holds the rendered children.
	fn render(&self, attrs: &ModuleAttrs<'_>, inner_html: &str) -> String;

	/// Module-specific CSS scoped to `selector`
	fn generate_css(&self, attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
		declarative::compile(self.style_descriptors(), attrs, selector, ctx)
	}
}

/// Schema combining a module's own fields, its descriptor fields and its style families
pub fn module_schema(
	uses: StyleUses,
	descriptors: &[StyleDescriptor],
	fields: impl IntoIterator<Item = FieldSpec>,
) -> FieldSchema {
	uses.schema()
		.fields(descriptors.iter().map(StyleDescriptor::field))
		.fields(fields)
}
