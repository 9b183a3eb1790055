//! # Pagewright
//!
//! Content-tree normalizer, responsive style compiler and HTML renderer for
//! modular page layouts.
//!
//! A page is a forest of sections holding rows, columns and typed content
//! modules. Pagewright repairs loosely-typed trees coming from editors or
//! importers, resolves every node's style attributes, compiles them into
//! scoped CSS and renders the whole page to `{ html, css }`.
//!
//! ## Feature Flags
//!
//! - `tree` - canonical tree and normalizer
//! - `style` - style resolution and CSS compiler families
//! - `modules` - module registry and built-in modules
//! - `render` - renderer and settings (enables all of the above)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "render")]
//! # {
//! use serde_json::json;
//!
//! let output = pagewright::render_json(&json!([
//!     {"type": "heading", "text": "Welcome", "level": "h1"},
//!     {"type": "text", "content": "First paragraph"}
//! ]))
//! .unwrap();
//!
//! assert!(output.html.contains("<h1 class=\"pw-heading\">Welcome</h1>"));
//! # }
//! ```
//!
//! ## Custom Modules
//!
//! New module types implement [`modules::ModuleCapability`] and are added
//! with [`modules::ModuleRegistry::register`]; the normalizer and the
//! renderer need no changes.

#[cfg(feature = "modules")]
pub mod modules;
#[cfg(feature = "render")]
pub mod render;
#[cfg(feature = "style")]
pub mod style;
#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "render")]
use serde_json::Value;

/// Normalize `input` and render it with the built-in modules and default settings.
///
/// `input` is a bare element list or a `{ version, content }` envelope.
///
/// # Errors
///
/// Returns [`render::RenderError::Tree`] when `input` holds no list of
/// elements and [`render::RenderError::Registry`] when a module type is not
/// registered.
#[cfg(feature = "render")]
pub fn render_json(input: &Value) -> render::RenderResult<render::RenderOutput> {
	render::Renderer::default().render_value(input)
}

/// Re-exports of commonly used types
pub mod prelude {
	#[cfg(feature = "tree")]
	pub use crate::tree::{Document, Node, NodeKind, Normalizer, RandomIds, SequentialIds, TreeError};

	#[cfg(feature = "style")]
	pub use crate::style::{
		Attrs, Breakpoint, Breakpoints, FieldSchema, FieldSpec, RangeWarning, StyleContext,
		StyleDescriptor, StyleFamily,
	};

	#[cfg(feature = "modules")]
	pub use crate::modules::{ModuleAttrs, ModuleCapability, ModuleRegistry, RegistryError, StyleUses};

	#[cfg(feature = "render")]
	pub use crate::render::{RenderError, RenderOutput, RenderSettings, Renderer};

	#[cfg(feature = "render")]
	pub use crate::render_json;
}
