//! Subcommand implementations

pub(crate) mod normalize;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use pagewright::tree::{Document, IdGenerator, Normalizer, RandomIds, SequentialIds};
use serde_json::Value;

/// Read JSON from `path`, or from stdin when `path` is `-`
pub(crate) fn read_json(path: &Path) -> anyhow::Result<Value> {
	let text = if path.as_os_str() == "-" {
		let mut text = String::new();
		std::io::stdin()
			.read_to_string(&mut text)
			.context("Failed to read stdin")?;
		text
	} else {
		std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?
	};
	serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Read and normalize a document
pub(crate) fn load_document(path: &Path, sequential_ids: bool) -> anyhow::Result<Document> {
	let value = read_json(path)?;
	let document = if sequential_ids {
		normalize_with(&value, SequentialIds::new())
	} else {
		normalize_with(&value, RandomIds)
	};
	document.with_context(|| format!("Failed to normalize {}", path.display()))
}

fn normalize_with<G: IdGenerator>(value: &Value, ids: G) -> pagewright::tree::TreeResult<Document> {
	let mut normalizer = Normalizer::with_ids(ids);
	Document::from_value(value, &mut normalizer)
}
