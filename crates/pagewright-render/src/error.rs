//! Error types for pagewright-render

use std::path::PathBuf;

use pagewright_modules::RegistryError;
use pagewright_tree::TreeError;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		/// File that failed
		path: PathBuf,
		/// Underlying IO error
		source: std::io::Error,
	},

	/// The settings text is not valid TOML for [`RenderSettings`](crate::RenderSettings)
	#[error("Failed to parse settings: {0}")]
	Parse(String),

	/// A setting has an unusable value
	#[error("Invalid setting `{key}`: {message}")]
	Invalid {
		/// Offending key
		key: &'static str,
		/// What is wrong with it
		message: String,
	},
}

/// Errors surfaced by a render call
#[derive(Debug, Error)]
pub enum RenderError {
	/// Input could not be turned into a canonical tree
	#[error(transparent)]
	Tree(#[from] TreeError),

	/// A module type is not registered; the whole render is aborted
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// Render settings are unusable
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
