//! Error types for pagewright-modules

use thiserror::Error;

/// Errors raised by the module registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// No capability is registered for the module-type key
	#[error("Module type not registered: {0}")]
	UnknownModuleType(String),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
