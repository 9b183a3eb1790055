//! Style schemas of structural nodes
//!
//! Sections, rows and columns carry every style family plus a small
//! descriptor table of their own.

use once_cell::sync::Lazy;
use pagewright_style::prelude::*;
use pagewright_tree::NodeKind;

/// Style configuration of one structural kind
#[derive(Debug)]
pub struct StructuralStyle {
	/// Class name after the prefix, e.g. `section`
	pub class: &'static str,
	/// Children sit in an extra `<div class="{prefix}-{class}-inner">`
	pub inner: bool,
	/// Family fields plus descriptor fields
	pub schema: FieldSchema,
	/// Kind-specific style table
	pub descriptors: &'static [StyleDescriptor],
}

const SECTION_DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("inner_width", "max-width")
		.selector(".{prefix}-section-inner")
		.unit("px")
		.responsive(),
];

const ROW_DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("column_gap", "gap").unit("px").responsive(),
	StyleDescriptor::new("vertical_align", "align-items").responsive(),
];

const COLUMN_DESCRIPTORS: &[StyleDescriptor] = &[
	StyleDescriptor::new("text_align", "text-align").responsive(),
];

fn structural_style(
	class: &'static str,
	inner: bool,
	descriptors: &'static [StyleDescriptor],
) -> StructuralStyle {
	let schema = StyleFamily::ALL
		.into_iter()
		.fold(FieldSchema::new(), FieldSchema::family)
		.fields(descriptors.iter().map(StyleDescriptor::field));
	StructuralStyle {
		class,
		inner,
		schema,
		descriptors,
	}
}

static SECTION: Lazy<StructuralStyle> =
	Lazy::new(|| structural_style("section", true, SECTION_DESCRIPTORS));
static ROW: Lazy<StructuralStyle> = Lazy::new(|| structural_style("row", false, ROW_DESCRIPTORS));
static COLUMN: Lazy<StructuralStyle> =
	Lazy::new(|| structural_style("column", false, COLUMN_DESCRIPTORS));

/// Style configuration for `kind`, `None` for modules
pub fn style_for(kind: &NodeKind) -> Option<&'static StructuralStyle> {
	match kind {
		NodeKind::Section => Some(&*SECTION),
		NodeKind::Row => Some(&*ROW),
		NodeKind::Column => Some(&*COLUMN),
		NodeKind::Module(_) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagewright_style::families::declarative;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(NodeKind::Section, "section")]
	#[case(NodeKind::Row, "row")]
	#[case(NodeKind::Column, "column")]
	fn test_style_for_structural(#[case] kind: NodeKind, #[case] class: &str) {
		let style = style_for(&kind).unwrap();

		assert_eq!(style.class, class);
		assert!(style.schema.get("background").is_some());
		assert!(style.schema.get("motion").is_some());
	}

	#[rstest]
	fn test_modules_have_no_structural_style() {
		assert!(style_for(&NodeKind::Module("text".into())).is_none());
	}

	#[rstest]
	fn test_row_gap_descriptor() {
		let style = style_for(&NodeKind::Row).unwrap();
		let attrs = json!({"column_gap": "40", "column_gap__phone": "0"});

		let css = declarative::compile(style.descriptors, attrs.as_object().unwrap(), ".r", &StyleContext::default());

		assert_eq!(
			css,
			".r {\n    gap: 40px;\n}\n@media (max-width: 767px) {\n.r {\n    gap: 0;\n}\n}\n"
		);
	}
}
