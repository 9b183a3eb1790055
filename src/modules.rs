//! Module registry module.
//!
//! The capability trait, the registry and the built-in module set.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "modules")]
//! use pagewright::modules::{ModuleCapability, ModuleRegistry};
//! ```

#[cfg(feature = "modules")]
pub use pagewright_modules::*;
