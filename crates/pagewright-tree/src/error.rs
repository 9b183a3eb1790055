//! Error types for pagewright-tree

use thiserror::Error;

/// Errors raised while turning external input into a canonical tree.
///
/// The normalizer repairs every shape it can. Only input whose top level is
/// not list-shaped is rejected.
#[derive(Debug, Error)]
pub enum TreeError {
	/// Top-level input is not a list of element descriptors
	#[error("Structural error: {0}")]
	Structural(String),

	/// Input text is not valid JSON
	#[error("Invalid JSON input: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
