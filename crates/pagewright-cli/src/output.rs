//! Output helpers

use std::path::Path;

use anyhow::Context;
use colored::Colorize;

/// Print a success message to stderr
pub(crate) fn success(msg: &str) {
	eprintln!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message to stderr
pub(crate) fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Write `content` to `path`, or to stdout when `path` is `None`
pub(crate) fn emit(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
	match path {
		Some(path) => {
			std::fs::write(path, content)
				.with_context(|| format!("Failed to write {}", path.display()))?;
			success(&format!("Wrote {} ({} bytes)", path.display(), content.len()));
		}
		None => println!("{}", content),
	}
	Ok(())
}
