//! `pagewright normalize`

use std::path::Path;

use super::load_document;
use crate::output::emit;

/// Canonical JSON of the document at `file`
pub(crate) fn execute(file: &Path, sequential_ids: bool) -> anyhow::Result<String> {
	let document = load_document(file, sequential_ids)?;
	Ok(serde_json::to_string_pretty(&document)?)
}

pub(crate) fn run(file: &Path, sequential_ids: bool, output: Option<&Path>) -> anyhow::Result<()> {
	let json = execute(file, sequential_ids)?;
	emit(&json, output)
}
