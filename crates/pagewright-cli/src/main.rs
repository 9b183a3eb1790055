//! Pagewright CLI
//!
//! Normalizes and renders content trees from JSON files.
//!
//! ## Usage
//!
//! ```bash
//! pagewright normalize page.json
//! pagewright render page.json --settings render.toml --html page.html --css page.css
//! pagewright -vv render page.json --sequential-ids
//! ```

mod commands;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::render::RenderArgs;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(about = "Normalize and render modular page layouts", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the canonical tree of a JSON document
	Normalize {
		/// Input JSON file, `-` for stdin
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Generate ids as `<kind>_<n>` instead of random ones
		#[arg(long)]
		sequential_ids: bool,

		/// Write the result to a file instead of stdout
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,
	},

	/// Render a JSON document to HTML and CSS
	Render {
		/// Input JSON file, `-` for stdin
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// TOML render settings
		#[arg(long, value_name = "PATH")]
		settings: Option<PathBuf>,

		/// Write the HTML to a file
		#[arg(long, value_name = "PATH")]
		html: Option<PathBuf>,

		/// Write the CSS to a file
		#[arg(long, value_name = "PATH")]
		css: Option<PathBuf>,

		/// Generate ids as `<kind>_<n>` instead of random ones
		#[arg(long)]
		sequential_ids: bool,
	},
}

fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let result = match cli.command {
		Commands::Normalize {
			file,
			sequential_ids,
			output,
		} => commands::normalize::run(&file, sequential_ids, output.as_deref()),
		Commands::Render {
			file,
			settings,
			html,
			css,
			sequential_ids,
		} => commands::render::run(&RenderArgs {
			file,
			settings,
			html,
			css,
			sequential_ids,
		}),
	};

	if let Err(e) = result {
		output::error(&format!("{:#}", e));
		process::exit(1);
	}
}
