//! Style module.
//!
//! Field schemas, the resolver and the CSS compiler families.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "style")]
//! use pagewright::style::{StyleContext, StyleFamily};
//! ```

#[cfg(feature = "style")]
pub use pagewright_style::*;
