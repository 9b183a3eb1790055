//! # pagewright-style
//!
//! Style field resolution and CSS generation for pagewright nodes.
//!
//! ## Architecture
//!
//! ```text
//! pagewright-style
//! ├── schema      - field kinds, defaults, variants, ranges
//! ├── resolver    - explicit > module default > schema default, total maps
//! ├── units       - unit suffix policy
//! ├── sanitize    - strips characters that could escape a declaration and
//!                   escapes quoted selector strings
//! ├── breakpoint  - desktop / tablet / phone and their media queries
//! ├── css         - rules, responsive grouping, per-render stylesheet
//! ├── keyframes   - bundled entrance animation keyframes
//! └── families    - spacing, border, box shadow, sizing, position,
//!                   background, animation, motion, overflow, custom
//!                   declarations and declarative descriptor tables
//! ```
//!
//! Every family is a pure function of `(attrs, selector, context)`:
//!
//! ```rust
//! use pagewright_style::prelude::*;
//! use serde_json::json;
//!
//! let attrs = json!({"margin": {"top": "10", "right": "10", "bottom": "10", "left": "10", "unit": "px"}});
//! let css = StyleFamily::Spacing.compile(attrs.as_object().unwrap(), ".hero", &StyleContext::default());
//!
//! assert_eq!(css, ".hero {\n    margin: 10px;\n}\n");
//! ```

pub mod breakpoint;
pub mod css;
pub mod families;
pub mod keyframes;
pub mod resolver;
pub mod sanitize;
pub mod schema;
pub mod units;
pub mod value;

pub use breakpoint::{Breakpoint, Breakpoints, StyleVariant};
pub use css::{ResponsiveCss, Rule, StyleSheet};
pub use families::declarative::StyleDescriptor;
pub use families::{StyleContext, StyleFamily};
pub use resolver::{Resolved, resolve};
pub use sanitize::{escape_css_string, sanitize_css_value};
pub use schema::{FieldKind, FieldSchema, FieldSpec, RangeWarning};
pub use units::format_length;
pub use value::Attrs;

/// Re-exports of commonly used types
pub mod prelude {
	pub use crate::breakpoint::{Breakpoint, Breakpoints, StyleVariant};
	pub use crate::css::{ResponsiveCss, Rule, StyleSheet};
	pub use crate::families::declarative::StyleDescriptor;
	pub use crate::families::{StyleContext, StyleFamily};
	pub use crate::resolver::{Resolved, resolve};
	pub use crate::schema::{FieldKind, FieldSchema, FieldSpec, RangeWarning};
	pub use crate::value::Attrs;
}
