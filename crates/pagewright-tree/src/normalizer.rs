//! Tree normalizer
//!
//! The single boundary between loosely-typed external element descriptors and
//! the canonical [`Node`] tree. Structure is repaired, never rejected:
//!
//! - rows, columns and modules found at the top level are wrapped in
//!   synthesized sections (plus rows and columns as needed)
//! - non-row section children and non-column row children are wrapped the same way
//! - a section nested in a section has its rows spliced into the parent, and a
//!   row nested in a row has its columns spliced
//! - structural nodes found inside a column or a module have their module
//!   descendants hoisted in document order
//! - consecutive wrapped siblings share one synthesized wrapper
//!
//! Missing ids are generated, existing ids are kept verbatim. Running the
//! normalizer over its own output changes nothing.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{TreeError, TreeResult};
use crate::ids::{IdGenerator, RandomIds};
use crate::node::{Attrs, Node, NodeKind};

/// Keys consumed by the normalizer itself
const RESERVED_KEYS: &[&str] = &["kind", "type", "id", "attrs", "children"];

/// Keys kept as node metadata instead of attributes
pub const META_KEYS: &[&str] = &["_section_type", "_role", "_pattern"];

/// Keys that turn into children when they hold a list of elements
const CHILD_LIST_KEYS: &[&str] = &["content", "sections", "rows", "columns", "modules"];

/// Responsive suffix aliases and their canonical spelling
const VARIANT_ALIASES: &[(&str, &str)] = &[
	("__mobile", "__phone"),
	("__sm", "__phone"),
	("__xs", "__phone"),
	("__md", "__tablet"),
	("__lg", "__tablet"),
];

/// Repairs external input into canonical trees
#[derive(Debug, Clone, Default)]
pub struct Normalizer<G = RandomIds> {
	ids: G,
}

impl Normalizer<RandomIds> {
	/// Normalizer generating random `<prefix>_<16 hex>` ids
	pub fn new() -> Self {
		Self { ids: RandomIds }
	}
}

impl<G: IdGenerator> Normalizer<G> {
	/// Normalizer using a custom id source
	pub fn with_ids(ids: G) -> Self {
		Self { ids }
	}

	/// Normalize a list of element descriptors.
	///
	/// # Errors
	///
	/// Returns [`TreeError::Structural`] when `input` is not a JSON array.
	pub fn normalize(&mut self, input: &Value) -> TreeResult<Vec<Node>> {
		let items = input.as_array().ok_or_else(|| {
			TreeError::Structural(format!(
				"expected a list of elements, found {}",
				json_type_name(input)
			))
		})?;
		let parsed = items.iter().filter_map(parse_element).collect();
		Ok(self.normalize_nodes(parsed))
	}

	/// Repair structure and fill in ids of nodes that are already typed
	pub fn normalize_nodes(&mut self, nodes: Vec<Node>) -> Vec<Node> {
		let mut tree = repair_top_level(nodes);
		self.assign_ids(&mut tree);
		tracing::debug!(
			sections = tree.len(),
			nodes = tree.iter().map(Node::subtree_len).sum::<usize>(),
			"normalized content tree"
		);
		tree
	}

	fn assign_ids(&mut self, tree: &mut [Node]) {
		let mut taken = HashSet::new();
		for node in tree.iter() {
			collect_ids(node, &mut taken);
		}
		for node in tree.iter_mut() {
			self.fill_ids(node, &mut taken);
		}
	}

	fn fill_ids(&mut self, node: &mut Node, taken: &mut HashSet<String>) {
		if node.id.is_empty() {
			let prefix = node.kind.id_prefix();
			loop {
				let candidate = self.ids.generate(&prefix);
				if taken.insert(candidate.clone()) {
					node.id = candidate;
					break;
				}
			}
		}
		for child in &mut node.children {
			self.fill_ids(child, taken);
		}
	}
}

/// Normalize with random ids
pub fn normalize(input: &Value) -> TreeResult<Vec<Node>> {
	Normalizer::new().normalize(input)
}

/// Canonical spelling of a responsive attribute key, if `key` uses an alias
pub fn canonical_attr_key(key: &str) -> Option<String> {
	VARIANT_ALIASES.iter().find_map(|(alias, canonical)| {
		key.strip_suffix(alias)
			.filter(|base| !base.is_empty())
			.map(|base| format!("{}{}", base, canonical))
	})
}

fn collect_ids(node: &Node, taken: &mut HashSet<String>) {
	if !node.id.is_empty() && !taken.insert(node.id.clone()) {
		tracing::warn!(id = %node.id, "duplicate node id preserved");
	}
	for child in &node.children {
		collect_ids(child, taken);
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a list",
		Value::Object(_) => "an object",
	}
}

fn parse_element(value: &Value) -> Option<Node> {
	match value {
		Value::Object(map) => Some(parse_object(map)),
		Value::String(text) => {
			tracing::debug!("wrapping bare string element in a text module");
			Some(Node::module(String::new(), "text").with_attr("content", text.clone()))
		}
		other => {
			tracing::debug!(found = json_type_name(other), "dropping non-element value");
			None
		}
	}
}

fn is_element_list(value: &Value) -> bool {
	value.as_array().is_some_and(|items| {
		items.iter().all(|item| {
			item.as_object()
				.is_some_and(|map| map.contains_key("kind") || map.contains_key("type"))
		})
	})
}

fn parse_object(map: &Map<String, Value>) -> Node {
	let type_key = map.get("type").and_then(Value::as_str);
	let kind = match map.get("kind").and_then(Value::as_str).or(type_key) {
		Some(discriminator) => NodeKind::from_discriminator(discriminator, type_key),
		None => NodeKind::Module(String::new()),
	};

	let id = match map.get("id") {
		Some(Value::String(id)) => id.clone(),
		Some(Value::Number(id)) => id.to_string(),
		_ => String::new(),
	};

	let mut attrs = match map.get("attrs") {
		Some(Value::Object(attrs)) => attrs.clone(),
		_ => Attrs::new(),
	};
	let mut meta = Attrs::new();
	let mut child_values: Vec<&Value> = match map.get("children") {
		Some(Value::Array(children)) => children.iter().collect(),
		_ => Vec::new(),
	};

	for (key, value) in map {
		let key = key.as_str();
		if RESERVED_KEYS.contains(&key) {
			continue;
		}
		if META_KEYS.contains(&key) {
			meta.insert(key.to_string(), value.clone());
		} else if CHILD_LIST_KEYS.contains(&key) && is_element_list(value) {
			if let Some(items) = value.as_array() {
				child_values.extend(items);
			}
		} else {
			attrs.insert(key.to_string(), value.clone());
		}
	}

	Node {
		id,
		kind,
		attrs: canonicalize_variant_keys(attrs),
		meta,
		children: child_values.into_iter().filter_map(parse_element).collect(),
	}
}

fn canonicalize_variant_keys(attrs: Attrs) -> Attrs {
	let mut out = Attrs::new();
	let mut aliased = Vec::new();
	for (key, value) in attrs {
		match canonical_attr_key(&key) {
			Some(canonical) => aliased.push((canonical, value)),
			None => {
				out.insert(key, value);
			}
		}
	}
	// Canonical spellings win over aliases of the same field.
	for (key, value) in aliased {
		out.entry(key).or_insert(value);
	}
	out
}

fn synthesized(kind: NodeKind, children: Vec<Node>) -> Node {
	let mut node = Node::new(String::new(), kind);
	node.children = children;
	node
}

fn repair_top_level(nodes: Vec<Node>) -> Vec<Node> {
	let mut sections = Vec::new();
	let mut pending = Vec::new();
	for node in nodes {
		if node.kind == NodeKind::Section {
			flush_into_section(&mut pending, &mut sections);
			sections.push(repair_section(node));
		} else {
			pending.push(node);
		}
	}
	flush_into_section(&mut pending, &mut sections);
	sections
}

fn flush_into_section(pending: &mut Vec<Node>, sections: &mut Vec<Node>) {
	if pending.is_empty() {
		return;
	}
	tracing::debug!(count = pending.len(), "wrapping top-level nodes in a section");
	let children = section_children(std::mem::take(pending));
	sections.push(synthesized(NodeKind::Section, children));
}

fn repair_section(mut section: Node) -> Node {
	section.children = section_children(std::mem::take(&mut section.children));
	section
}

fn section_children(children: Vec<Node>) -> Vec<Node> {
	let mut rows = Vec::new();
	let mut pending = Vec::new();
	for child in children {
		match child.kind {
			NodeKind::Row => {
				flush_into_row(&mut pending, &mut rows);
				rows.push(repair_row(child));
			}
			NodeKind::Section => {
				flush_into_row(&mut pending, &mut rows);
				tracing::debug!(id = %child.id, "splicing nested section into parent");
				rows.extend(section_children(child.children));
			}
			NodeKind::Column | NodeKind::Module(_) => pending.push(child),
		}
	}
	flush_into_row(&mut pending, &mut rows);
	rows
}

fn flush_into_row(pending: &mut Vec<Node>, rows: &mut Vec<Node>) {
	if pending.is_empty() {
		return;
	}
	tracing::debug!(count = pending.len(), "wrapping section children in a row");
	let children = row_children(std::mem::take(pending));
	rows.push(synthesized(NodeKind::Row, children));
}

fn repair_row(mut row: Node) -> Node {
	row.children = row_children(std::mem::take(&mut row.children));
	row
}

fn row_children(children: Vec<Node>) -> Vec<Node> {
	let mut columns = Vec::new();
	let mut pending = Vec::new();
	for child in children {
		match child.kind {
			NodeKind::Column => {
				flush_into_column(&mut pending, &mut columns);
				columns.push(repair_column(child));
			}
			NodeKind::Row => {
				flush_into_column(&mut pending, &mut columns);
				tracing::debug!(id = %child.id, "splicing nested row into parent");
				columns.extend(row_children(child.children));
			}
			NodeKind::Section => {
				flush_into_column(&mut pending, &mut columns);
				tracing::debug!(id = %child.id, "splicing section columns into row");
				columns.extend(
					section_children(child.children)
						.into_iter()
						.flat_map(|row| row.children),
				);
			}
			NodeKind::Module(_) => pending.push(child),
		}
	}
	flush_into_column(&mut pending, &mut columns);
	columns
}

fn flush_into_column(pending: &mut Vec<Node>, columns: &mut Vec<Node>) {
	if pending.is_empty() {
		return;
	}
	tracing::debug!(count = pending.len(), "wrapping row children in a column");
	let children = module_children(std::mem::take(pending));
	columns.push(synthesized(NodeKind::Column, children));
}

fn repair_column(mut column: Node) -> Node {
	column.children = module_children(std::mem::take(&mut column.children));
	column
}

fn repair_module(mut module: Node) -> Node {
	module.children = module_children(std::mem::take(&mut module.children));
	module
}

fn module_children(children: Vec<Node>) -> Vec<Node> {
	let mut modules = Vec::new();
	for child in children {
		hoist_modules(child, &mut modules);
	}
	modules
}

fn hoist_modules(node: Node, out: &mut Vec<Node>) {
	if node.is_structural() {
		tracing::debug!(id = %node.id, kind = node.kind.as_str(), "hoisting modules out of misplaced container");
		for child in node.children {
			hoist_modules(child, out);
		}
	} else {
		out.push(repair_module(node));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ids::SequentialIds;
	use rstest::rstest;
	use serde_json::json;

	fn normalizer() -> Normalizer<SequentialIds> {
		Normalizer::with_ids(SequentialIds::new())
	}

	#[rstest]
	#[case(json!({"content": []}))]
	#[case(json!("section"))]
	#[case(json!(null))]
	#[case(json!(42))]
	fn test_non_list_input_is_structural_error(#[case] input: Value) {
		let result = normalizer().normalize(&input);

		assert!(matches!(result, Err(TreeError::Structural(_))));
	}

	#[rstest]
	fn test_bare_module_gets_full_wrapping() {
		// Arrange
		let input = json!([{"type": "text", "content": "Hello"}]);

		// Act
		let tree = normalizer().normalize(&input).unwrap();

		// Assert
		assert_eq!(tree.len(), 1);
		let section = &tree[0];
		assert_eq!(section.kind, NodeKind::Section);
		assert_eq!(section.id, "section_1");
		let row = &section.children[0];
		assert_eq!(row.kind, NodeKind::Row);
		let column = &row.children[0];
		assert_eq!(column.kind, NodeKind::Column);
		let module = &column.children[0];
		assert_eq!(module.module_type(), Some("text"));
		assert_eq!(module.attrs["content"], "Hello");
		assert_eq!(module.id, "text_4");
	}

	#[rstest]
	fn test_consecutive_modules_share_wrappers() {
		let input = json!([
			{"type": "heading", "text": "A"},
			{"type": "text", "content": "B"},
			{"kind": "section", "children": []},
		]);

		let tree = normalizer().normalize(&input).unwrap();

		assert_eq!(tree.len(), 2);
		assert_eq!(tree[0].children[0].children[0].children.len(), 2);
		assert!(tree[1].children.is_empty());
	}

	#[rstest]
	fn test_top_level_row_and_column_are_wrapped() {
		let input = json!([
			{"kind": "row", "id": "r", "children": [{"kind": "column", "id": "c"}]},
			{"kind": "section", "id": "s"},
			{"kind": "column", "id": "lone"},
		]);

		let tree = normalizer().normalize(&input).unwrap();

		assert_eq!(tree.len(), 3);
		assert_eq!(tree[0].children[0].id, "r");
		assert_eq!(tree[1].id, "s");
		assert_eq!(tree[2].children[0].kind, NodeKind::Row);
		assert_eq!(tree[2].children[0].children[0].id, "lone");
	}

	#[rstest]
	fn test_section_child_column_gets_row_only() {
		let input = json!([{"kind": "section", "children": [{"kind": "column", "id": "c1"}]}]);

		let tree = normalizer().normalize(&input).unwrap();

		let row = &tree[0].children[0];
		assert_eq!(row.kind, NodeKind::Row);
		assert_eq!(row.children[0].id, "c1");
		assert_eq!(row.children[0].kind, NodeKind::Column);
	}

	#[rstest]
	fn test_nested_structures_are_spliced_and_hoisted() {
		let input = json!([{
			"kind": "section",
			"children": [
				{"kind": "section", "children": [{"kind": "row", "id": "inner_row"}]},
				{"kind": "row", "id": "outer_row", "children": [
					{"kind": "row", "children": [{"kind": "column", "id": "spliced_col"}]},
					{"kind": "column", "id": "col", "children": [
						{"kind": "row", "children": [{"kind": "column", "children": [{"type": "text", "id": "deep"}]}]}
					]}
				]}
			]
		}]);

		let tree = normalizer().normalize(&input).unwrap();

		let rows = &tree[0].children;
		assert_eq!(rows[0].id, "inner_row");
		assert_eq!(rows[1].id, "outer_row");
		assert_eq!(rows[1].children[0].id, "spliced_col");
		assert_eq!(rows[1].children[1].children[0].id, "deep");
	}

	#[rstest]
	fn test_loose_attribute_shape() {
		// Arrange
		let input = json!([{
			"type": "accordion",
			"id": "acc",
			"title_color": "#333",
			"_role": "faq",
			"attrs": {"title_color": "#000", "gap": "10"},
			"content": [
				{"type": "accordion_item", "title": "Q1", "content": "A1"}
			]
		}]);

		// Act
		let tree = normalizer().normalize(&input).unwrap();

		// Assert
		let accordion = &tree[0].children[0].children[0].children[0];
		assert_eq!(accordion.attrs["title_color"], "#333");
		assert_eq!(accordion.attrs["gap"], "10");
		assert!(!accordion.attrs.contains_key("content"));
		assert_eq!(accordion.meta["_role"], "faq");
		let item = &accordion.children[0];
		assert_eq!(item.module_type(), Some("accordion_item"));
		assert_eq!(item.attrs["content"], "A1");
	}

	#[rstest]
	fn test_legacy_child_keys() {
		let input = json!([{
			"type": "section",
			"rows": [{"type": "row", "columns": [{"type": "column", "modules": [{"type": "text"}]}]}]
		}]);

		let tree = normalizer().normalize(&input).unwrap();

		assert_eq!(tree[0].children[0].children[0].children[0].module_type(), Some("text"));
	}

	#[rstest]
	fn test_layout_string_is_not_children() {
		let input = json!([{"kind": "row", "columns": "1_2,1_2"}]);

		let tree = normalizer().normalize(&input).unwrap();

		assert_eq!(tree[0].children[0].attrs["columns"], "1_2,1_2");
	}

	#[rstest]
	fn test_scalar_elements() {
		let input = json!(["Just text", null, 3, true]);

		let tree = normalizer().normalize(&input).unwrap();

		let modules = &tree[0].children[0].children[0].children;
		assert_eq!(modules.len(), 1);
		assert_eq!(modules[0].attrs["content"], "Just text");
	}

	#[rstest]
	#[case("font_size__mobile", Some("font_size__phone"))]
	#[case("font_size__xs", Some("font_size__phone"))]
	#[case("margin__md", Some("margin__tablet"))]
	#[case("margin__lg", Some("margin__tablet"))]
	#[case("margin__phone", None)]
	#[case("__sm", None)]
	fn test_canonical_attr_key(#[case] key: &str, #[case] expected: Option<&str>) {
		assert_eq!(canonical_attr_key(key).as_deref(), expected);
	}

	#[rstest]
	fn test_canonical_variant_wins_over_alias() {
		let input = json!([{"type": "text", "color__mobile": "red", "color__phone": "blue", "size__md": "12"}]);

		let tree = normalizer().normalize(&input).unwrap();

		let attrs = &tree[0].children[0].children[0].children[0].attrs;
		assert_eq!(attrs["color__phone"], "blue");
		assert_eq!(attrs["size__tablet"], "12");
		assert!(!attrs.contains_key("color__mobile"));
	}

	#[rstest]
	fn test_existing_ids_preserved_and_generated_ids_avoid_them() {
		let input = json!([
			{"kind": "section", "id": "section_1", "children": [{"kind": "row", "id": "dup"}]},
			{"kind": "section", "id": "dup"},
			{"type": "text"},
		]);

		let tree = normalizer().normalize(&input).unwrap();

		assert_eq!(tree[0].id, "section_1");
		assert_eq!(tree[0].children[0].id, "dup");
		assert_eq!(tree[1].id, "dup");
		assert_eq!(tree[2].id, "section_2");
	}

	#[rstest]
	fn test_normalizing_output_is_noop() {
		let input = json!([
			{"type": "button", "text": "Go"},
			{"kind": "row", "children": [{"type": "text"}]},
		]);
		let mut normalizer = normalizer();
		let first = normalizer.normalize(&input).unwrap();
		let serialized = Value::Array(first.iter().map(Node::to_value).collect());

		let second = normalizer.normalize(&serialized).unwrap();

		assert_eq!(first, second);
	}
}
