//! Canonical content tree
//!
//! A page is an ordered forest of [`Node`]s. Sections hold rows, rows hold
//! columns and columns hold modules. Some modules (accordions, tabs) hold
//! nested module children; that is the only recursive exception.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Ordered attribute map attached to every node
pub type Attrs = Map<String, Value>;

/// Discriminator of a [`Node`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Top-level container
	Section,
	/// Horizontal container inside a section
	Row,
	/// Vertical container inside a row
	Column,
	/// Content leaf identified by its module-type key
	Module(String),
}

impl NodeKind {
	/// Canonical `kind` string written by [`Node::to_value`]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Section => "section",
			Self::Row => "row",
			Self::Column => "column",
			Self::Module(_) => "module",
		}
	}

	/// Resolve a discriminator string found in external input.
	///
	/// `section`, `row` and `column` (any case) are structural. `module`
	/// defers to `module_type`. Anything else is itself a module-type key.
	pub fn from_discriminator(discriminator: &str, module_type: Option<&str>) -> Self {
		match discriminator.trim().to_ascii_lowercase().as_str() {
			"section" => Self::Section,
			"row" => Self::Row,
			"column" => Self::Column,
			"module" => Self::Module(module_type.unwrap_or_default().trim().to_string()),
			_ => Self::Module(discriminator.trim().to_string()),
		}
	}

	/// Whether this is a Section, Row or Column
	pub fn is_structural(&self) -> bool {
		!matches!(self, Self::Module(_))
	}

	/// Module-type key, `None` for structural kinds
	pub fn module_type(&self) -> Option<&str> {
		match self {
			Self::Module(key) => Some(key),
			_ => None,
		}
	}

	/// Prefix used when generating ids for nodes of this kind
	pub fn id_prefix(&self) -> String {
		match self {
			Self::Module(key) if !key.is_empty() => key
				.chars()
				.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
				.collect(),
			Self::Module(_) => "module".to_string(),
			other => other.as_str().to_string(),
		}
	}
}

/// A node of the canonical tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	/// Stable identifier, unique within a well-formed document
	pub id: String,
	/// Structural kind or module type
	pub kind: NodeKind,
	/// Style and content attributes
	pub attrs: Attrs,
	/// Passthrough metadata (`_section_type`, `_role`, `_pattern`)
	pub meta: Attrs,
	/// Ordered children
	pub children: Vec<Node>,
}

impl Node {
	/// Create an empty node of the given kind
	pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
		Self {
			id: id.into(),
			kind,
			attrs: Attrs::new(),
			meta: Attrs::new(),
			children: Vec::new(),
		}
	}

	/// Create an empty section
	pub fn section(id: impl Into<String>) -> Self {
		Self::new(id, NodeKind::Section)
	}

	/// Create an empty row
	pub fn row(id: impl Into<String>) -> Self {
		Self::new(id, NodeKind::Row)
	}

	/// Create an empty column
	pub fn column(id: impl Into<String>) -> Self {
		Self::new(id, NodeKind::Column)
	}

	/// Create an empty module of the given type
	pub fn module(id: impl Into<String>, module_type: impl Into<String>) -> Self {
		Self::new(id, NodeKind::Module(module_type.into()))
	}

	/// Set an attribute
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	/// Append a child
	pub fn with_child(mut self, child: Node) -> Self {
		self.children.push(child);
		self
	}

	/// Whether this is a Section, Row or Column
	pub fn is_structural(&self) -> bool {
		self.kind.is_structural()
	}

	/// Module-type key, `None` for structural nodes
	pub fn module_type(&self) -> Option<&str> {
		self.kind.module_type()
	}

	/// Number of nodes in this subtree, including `self`
	pub fn subtree_len(&self) -> usize {
		1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
	}

	/// Canonical JSON shape.
	///
	/// Feeding this back through the normalizer yields an equal node.
	pub fn to_value(&self) -> Value {
		let mut map = Map::new();
		map.insert("kind".into(), Value::from(self.kind.as_str()));
		if let Some(module_type) = self.kind.module_type() {
			map.insert("type".into(), Value::from(module_type));
		}
		map.insert("id".into(), Value::from(self.id.as_str()));
		for (key, value) in &self.meta {
			map.insert(key.clone(), value.clone());
		}
		map.insert("attrs".into(), Value::Object(self.attrs.clone()));
		map.insert(
			"children".into(),
			Value::Array(self.children.iter().map(Node::to_value).collect()),
		);
		Value::Object(map)
	}
}

impl Serialize for Node {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_value().serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("section", None, NodeKind::Section)]
	#[case(" ROW ", None, NodeKind::Row)]
	#[case("Column", None, NodeKind::Column)]
	#[case("module", Some("button"), NodeKind::Module("button".into()))]
	#[case("heading", None, NodeKind::Module("heading".into()))]
	fn test_kind_from_discriminator(
		#[case] discriminator: &str,
		#[case] module_type: Option<&str>,
		#[case] expected: NodeKind,
	) {
		assert_eq!(NodeKind::from_discriminator(discriminator, module_type), expected);
	}

	#[rstest]
	fn test_id_prefix_replaces_unsafe_characters() {
		assert_eq!(NodeKind::Module("my-module.v2".into()).id_prefix(), "my_module_v2");
		assert_eq!(NodeKind::Module(String::new()).id_prefix(), "module");
		assert_eq!(NodeKind::Row.id_prefix(), "row");
	}

	#[rstest]
	fn test_to_value_shape() {
		// Arrange
		let mut module = Node::module("m1", "text").with_attr("content", "hi");
		module.meta.insert("_role".into(), json!("intro"));
		let section = Node::section("s1").with_child(Node::row("r1").with_child(Node::column("c1").with_child(module)));

		// Act
		let value = section.to_value();

		// Assert
		let module_value = &value["children"][0]["children"][0]["children"][0];
		assert_eq!(value["kind"], "section");
		assert!(value.get("type").is_none());
		assert_eq!(module_value["kind"], "module");
		assert_eq!(module_value["type"], "text");
		assert_eq!(module_value["_role"], "intro");
		assert_eq!(module_value["attrs"]["content"], "hi");
		assert_eq!(section.subtree_len(), 4);
	}
}
