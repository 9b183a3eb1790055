//! `pagewright render`

use std::path::PathBuf;

use anyhow::Context;
use pagewright::modules::ModuleRegistry;
use pagewright::render::{RenderOutput, RenderSettings, Renderer};

use super::load_document;
use crate::output::emit;

/// Arguments of the render subcommand
pub(crate) struct RenderArgs {
	pub(crate) file: PathBuf,
	pub(crate) settings: Option<PathBuf>,
	pub(crate) html: Option<PathBuf>,
	pub(crate) css: Option<PathBuf>,
	pub(crate) sequential_ids: bool,
}

/// Render the document named by `args`
pub(crate) fn execute(args: &RenderArgs) -> anyhow::Result<RenderOutput> {
	let settings = match &args.settings {
		Some(path) => RenderSettings::from_file(path)?,
		None => RenderSettings::default(),
	};
	let document = load_document(&args.file, args.sequential_ids)?;
	let renderer = Renderer::new(ModuleRegistry::with_builtin(), settings);
	let output = renderer
		.render_document(&document)
		.with_context(|| format!("Failed to render {}", args.file.display()))?;
	tracing::info!(
		file = %args.file.display(),
		html_bytes = output.html.len(),
		css_bytes = output.css.len(),
		"rendered document"
	);
	Ok(output)
}

pub(crate) fn run(args: &RenderArgs) -> anyhow::Result<()> {
	let output = execute(args)?;
	if args.html.is_none() && args.css.is_none() {
		return emit(&serde_json::to_string_pretty(&output)?, None);
	}
	if let Some(path) = &args.html {
		emit(&output.html, Some(path))?;
	}
	if let Some(path) = &args.css {
		emit(&output.css, Some(path))?;
	}
	Ok(())
}
