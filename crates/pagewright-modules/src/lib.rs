//! # pagewright-modules
//!
//! Module capabilities and the registry that maps module-type keys to them.
//!
//! ## Architecture
//!
//! ```text
//! pagewright-modules
//! ├── capability  - ModuleCapability trait, style family flags, attribute view
//! ├── registry    - type key -> capability lookup
//! ├── html        - escaping and URL safety for module markup
//! └── builtin     - text, heading, button, image, code, divider,
//!                   accordion (+ item), tabs (+ tab)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewright_modules::prelude::*;
//!
//! let registry = ModuleRegistry::with_builtin();
//! let heading = registry.resolve("heading").unwrap();
//!
//! assert_eq!(heading.label(), "Heading");
//! assert!(registry.resolve("carousel").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `builtin` (default): the built-in module set and
//!   [`ModuleRegistry::with_builtin`]

#[cfg(feature = "builtin")]
pub mod builtin;
pub mod capability;
pub mod error;
pub mod html;
pub mod registry;

pub use capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};
pub use error::{RegistryError, RegistryResult};
pub use registry::ModuleRegistry;

/// Re-exports of commonly used types
pub mod prelude {
	pub use crate::capability::{ModuleAttrs, ModuleCapability, StyleUses, module_schema};
	pub use crate::error::{RegistryError, RegistryResult};
	pub use crate::registry::ModuleRegistry;
}
