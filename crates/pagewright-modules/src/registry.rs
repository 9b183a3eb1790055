//! Module registry
//!
//! Maps module-type keys to capabilities. New module types only need a
//! [`ModuleRegistry::register`] call; the renderer and normalizer never
//! change.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::capability::ModuleCapability;
use crate::error::{RegistryError, RegistryResult};

/// Registry of module capabilities
#[derive(Clone, Default)]
pub struct ModuleRegistry {
	modules: HashMap<String, Arc<dyn ModuleCapability>>,
}

impl ModuleRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry holding the built-in module set
	#[cfg(feature = "builtin")]
	pub fn with_builtin() -> Self {
		let mut registry = Self::new();
		crate::builtin::register_builtin(&mut registry);
		registry
	}

	/// Register a capability, returning the one it replaces
	pub fn register<C>(
		&mut self,
		type_key: impl Into<String>,
		capability: C,
	) -> Option<Arc<dyn ModuleCapability>>
	where
		C: ModuleCapability + 'static,
	{
		let type_key = type_key.into();
		tracing::debug!(module = %type_key, "registering module type");
		self.modules.insert(type_key, Arc::new(capability))
	}

	/// Look up the capability for `type_key`
	///
	/// # Errors
	///
	/// Returns [`RegistryError::UnknownModuleType`] when nothing is registered
	/// under `type_key`.
	pub fn resolve(&self, type_key: &str) -> RegistryResult<&dyn ModuleCapability> {
		self.modules
			.get(type_key)
			.map(|module| module.as_ref())
			.ok_or_else(|| RegistryError::UnknownModuleType(type_key.to_string()))
	}

	/// Whether `type_key` is registered
	pub fn contains(&self, type_key: &str) -> bool {
		self.modules.contains_key(type_key)
	}

	/// Registered keys, sorted
	pub fn type_keys(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.modules.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	/// Number of registered module types
	pub fn len(&self) -> usize {
		self.modules.len()
	}

	/// Whether no module types are registered
	pub fn is_empty(&self) -> bool {
		self.modules.is_empty()
	}
}

impl fmt::Debug for ModuleRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ModuleRegistry")
			.field("modules", &self.type_keys())
			.finish()
	}
}
