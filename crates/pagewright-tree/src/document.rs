//! Document envelope
//!
//! External payloads arrive as `{ "version": ..., "content": [...] }`. The
//! version is carried through untouched and unknown top-level keys are
//! ignored. A bare list and the legacy `{ "sections": [...] }` envelope are
//! accepted as well.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{TreeError, TreeResult};
use crate::ids::IdGenerator;
use crate::node::Node;
use crate::normalizer::Normalizer;

/// A normalized page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
	/// Opaque version marker from the input envelope
	pub version: Option<Value>,
	/// Canonical forest of sections
	pub content: Vec<Node>,
}

impl Document {
	/// Create a document from already canonical sections
	pub fn new(content: Vec<Node>) -> Self {
		Self {
			version: None,
			content,
		}
	}

	/// Unwrap the envelope and normalize its content.
	///
	/// # Errors
	///
	/// Returns [`TreeError::Structural`] when no list-shaped content can be found.
	pub fn from_value<G: IdGenerator>(
		value: &Value,
		normalizer: &mut Normalizer<G>,
	) -> TreeResult<Self> {
		match value {
			Value::Array(_) => Ok(Self {
				version: None,
				content: normalizer.normalize(value)?,
			}),
			Value::Object(envelope) => {
				let content = envelope
					.get("content")
					.or_else(|| envelope.get("sections"))
					.ok_or_else(|| {
						TreeError::Structural("document has no `content` list".to_string())
					})?;
				Ok(Self {
					version: envelope.get("version").cloned(),
					content: normalizer.normalize(content)?,
				})
			}
			_ => Err(TreeError::Structural(
				"document must be an object or a list".to_string(),
			)),
		}
	}

	/// Parse JSON text and normalize it
	pub fn from_json_str<G: IdGenerator>(
		json: &str,
		normalizer: &mut Normalizer<G>,
	) -> TreeResult<Self> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(&value, normalizer)
	}

	/// Canonical envelope
	pub fn to_value(&self) -> Value {
		let mut map = Map::new();
		if let Some(version) = &self.version {
			map.insert("version".into(), version.clone());
		}
		map.insert(
			"content".into(),
			Value::Array(self.content.iter().map(Node::to_value).collect()),
		);
		Value::Object(map)
	}
}

impl Serialize for Document {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_value().serialize(serializer)
	}
}
