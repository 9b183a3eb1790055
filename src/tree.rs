//! Content tree module.
//!
//! Canonical node types, the structural normalizer and the document
//! envelope.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "tree")]
//! use pagewright::tree::{Normalizer, SequentialIds};
//! ```

#[cfg(feature = "tree")]
pub use pagewright_tree::*;
