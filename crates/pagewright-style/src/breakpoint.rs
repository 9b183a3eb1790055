//! Responsive breakpoints

use serde::{Deserialize, Serialize};

/// Breakpoint a style value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
	/// Base styles, never wrapped in a media query
	Desktop,
	/// Tablet, `max-width` media query
	Tablet,
	/// Mobile, `max-width` media query
	Phone,
}

impl Breakpoint {
	/// All breakpoints in emission order
	pub const ALL: [Breakpoint; 3] = [Self::Desktop, Self::Tablet, Self::Phone];

	/// Attribute key suffix carrying this breakpoint's value
	pub fn suffix(&self) -> &'static str {
		match self {
			Self::Desktop => "",
			Self::Tablet => "__tablet",
			Self::Phone => "__phone",
		}
	}

	/// Attribute key holding `field` at this breakpoint
	pub fn key(&self, field: &str) -> String {
		format!("{}{}", field, self.suffix())
	}

	/// Short name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Desktop => "desktop",
			Self::Tablet => "tablet",
			Self::Phone => "phone",
		}
	}
}

/// Hover variant suffix
pub const HOVER_SUFFIX: &str = "__hover";

/// One attribute variant: a breakpoint value or the hover value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariant {
	/// Value for a breakpoint
	At(Breakpoint),
	/// Value applied under `:hover`, in the desktop block
	Hover,
}

impl StyleVariant {
	/// Every variant in emission order
	pub const ALL: [StyleVariant; 4] = [
		Self::At(Breakpoint::Desktop),
		Self::At(Breakpoint::Tablet),
		Self::At(Breakpoint::Phone),
		Self::Hover,
	];

	/// Attribute key holding `field` for this variant
	pub fn key(&self, field: &str) -> String {
		match self {
			Self::At(breakpoint) => breakpoint.key(field),
			Self::Hover => format!("{}{}", field, HOVER_SUFFIX),
		}
	}

	/// Breakpoint block the rule belongs to
	pub fn breakpoint(&self) -> Breakpoint {
		match self {
			Self::At(breakpoint) => *breakpoint,
			Self::Hover => Breakpoint::Desktop,
		}
	}

	/// Selector the rule targets
	pub fn selector(&self, selector: &str) -> String {
		match self {
			Self::At(_) => selector.to_string(),
			Self::Hover => format!("{}:hover", selector),
		}
	}

	/// Whether this is the base desktop value
	pub fn is_base(&self) -> bool {
		*self == Self::At(Breakpoint::Desktop)
	}
}

/// `max-width` thresholds in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
	/// Tablet threshold
	pub tablet: u32,
	/// Mobile threshold
	pub phone: u32,
}

impl Default for Breakpoints {
	fn default() -> Self {
		Self {
			tablet: 980,
			phone: 767,
		}
	}
}

impl Breakpoints {
	/// Media query wrapping `breakpoint`, `None` for desktop
	pub fn media_query(&self, breakpoint: Breakpoint) -> Option<String> {
		match breakpoint {
			Breakpoint::Desktop => None,
			Breakpoint::Tablet => Some(format!("@media (max-width: {}px)", self.tablet)),
			Breakpoint::Phone => Some(format!("@media (max-width: {}px)", self.phone)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Breakpoint::Desktop, "margin")]
	#[case(Breakpoint::Tablet, "margin__tablet")]
	#[case(Breakpoint::Phone, "margin__phone")]
	fn test_breakpoint_key(#[case] breakpoint: Breakpoint, #[case] expected: &str) {
		assert_eq!(breakpoint.key("margin"), expected);
	}

	#[rstest]
	#[case(StyleVariant::At(Breakpoint::Desktop), "width", Breakpoint::Desktop, ".a")]
	#[case(StyleVariant::At(Breakpoint::Phone), "width__phone", Breakpoint::Phone, ".a")]
	#[case(StyleVariant::Hover, "width__hover", Breakpoint::Desktop, ".a:hover")]
	fn test_style_variant(
		#[case] variant: StyleVariant,
		#[case] key: &str,
		#[case] breakpoint: Breakpoint,
		#[case] selector: &str,
	) {
		assert_eq!(variant.key("width"), key);
		assert_eq!(variant.breakpoint(), breakpoint);
		assert_eq!(variant.selector(".a"), selector);
	}

	#[rstest]
	fn test_default_media_queries() {
		let breakpoints = Breakpoints::default();

		assert_eq!(breakpoints.media_query(Breakpoint::Desktop), None);
		assert_eq!(
			breakpoints.media_query(Breakpoint::Tablet).as_deref(),
			Some("@media (max-width: 980px)")
		);
		assert_eq!(
			breakpoints.media_query(Breakpoint::Phone).as_deref(),
			Some("@media (max-width: 767px)")
		);
	}
}
