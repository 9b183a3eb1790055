//! Style compiler families
//!
//! Each family is a pure `(attrs, selector, context) -> CSS` function with
//! its own field set. [`StyleFamily`] lets callers pick families by flag.

pub mod animation;
pub mod background;
pub mod border;
pub mod box_shadow;
pub mod custom_css;
pub mod declarative;
pub mod motion;
pub mod overflow;
pub mod position;
pub mod sizing;
pub mod spacing;

use crate::breakpoint::Breakpoints;
use crate::schema::{FieldSchema, FieldSpec};
use crate::value::Attrs;

/// Render-wide inputs shared by every family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleContext {
	/// Media query thresholds
	pub breakpoints: Breakpoints,
	/// Prefix for generated class names and keyframes
	pub class_prefix: String,
}

impl Default for StyleContext {
	fn default() -> Self {
		Self {
			breakpoints: Breakpoints::default(),
			class_prefix: "pw".to_string(),
		}
	}
}

impl StyleContext {
	/// Context with the given prefix and default breakpoints
	pub fn new(class_prefix: impl Into<String>) -> Self {
		Self {
			class_prefix: class_prefix.into(),
			..Self::default()
		}
	}

	/// Replace the breakpoints
	pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
		self.breakpoints = breakpoints;
		self
	}

	/// Class marking an element whose scroll animation has started
	pub fn animated_class(&self) -> String {
		format!("{}-animated", self.class_prefix)
	}
}

/// Style families a node can opt into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
	/// Margin and padding
	Spacing,
	/// Border width, style, color and radius
	Border,
	/// Preset or custom box shadow
	BoxShadow,
	/// Width and height constraints
	Sizing,
	/// Position type, z-index and offsets
	Position,
	/// Color, gradient, image or video background
	Background,
	/// Entrance animation
	Animation,
	/// Scroll-driven motion effects
	Motion,
	/// Overflow and white-space
	Overflow,
	/// Free-form declarations for the element and its pseudo-elements
	CustomCss,
}

impl StyleFamily {
	/// Every family in emission order; custom declarations come last so they win
	pub const ALL: [StyleFamily; 10] = [
		Self::Background,
		Self::Spacing,
		Self::Border,
		Self::BoxShadow,
		Self::Sizing,
		Self::Position,
		Self::Overflow,
		Self::Animation,
		Self::Motion,
		Self::CustomCss,
	];

	/// Fields this family reads, with their defaults
	pub fn fields(&self) -> Vec<FieldSpec> {
		match self {
			Self::Spacing => spacing::fields(),
			Self::Border => border::fields(),
			Self::BoxShadow => box_shadow::fields(),
			Self::CustomCss => custom_css::fields(),
			Self::Sizing => sizing::fields(),
			Self::Position => position::fields(),
			Self::Background => background::fields(),
			Self::Animation => animation::fields(),
			Self::Motion => motion::fields(),
			Self::Overflow => overflow::fields(),
		}
	}

	/// Compile this family's CSS for `selector`
	pub fn compile(&self, attrs: &Attrs, selector: &str, ctx: &StyleContext) -> String {
		match self {
			Self::Spacing => spacing::compile(attrs, selector, ctx),
			Self::Border => border::compile(attrs, selector, ctx),
			Self::BoxShadow => box_shadow::compile(attrs, selector, ctx),
			Self::CustomCss => custom_css::compile(attrs, selector, ctx),
			Self::Sizing => sizing::compile(attrs, selector, ctx),
			Self::Position => position::compile(attrs, selector, ctx),
			Self::Background => background::compile(attrs, selector, ctx),
			Self::Animation => animation::compile(attrs, selector, ctx),
			Self::Motion => motion::compile(attrs, selector, ctx),
			Self::Overflow => overflow::compile(attrs, selector, ctx),
		}
	}
}

impl FieldSchema {
	/// Add every field of `family`
	pub fn family(self, family: StyleFamily) -> Self {
		self.fields(family.fields())
	}
}
