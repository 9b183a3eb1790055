//! # pagewright-tree
//!
//! Canonical content tree for modular page layouts, plus the normalizer that
//! turns loosely-typed external element descriptors into it.
//!
//! ## Architecture
//!
//! ```text
//! pagewright-tree
//! ├── node        - Section / Row / Column / Module tagged union
//! ├── normalizer  - structural repair, loose attribute shape, id assignment
//! ├── ids         - random and sequential id generators
//! └── document    - `{ version, content }` envelope
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewright_tree::prelude::*;
//! use serde_json::json;
//!
//! let mut normalizer = Normalizer::with_ids(SequentialIds::new());
//! let tree = normalizer.normalize(&json!([{"type": "text", "content": "Hi"}])).unwrap();
//!
//! assert_eq!(tree[0].kind, NodeKind::Section);
//! assert_eq!(tree[0].children[0].children[0].children[0].module_type(), Some("text"));
//! ```

pub mod document;
pub mod error;
pub mod ids;
pub mod node;
pub mod normalizer;

pub use document::Document;
pub use error::{TreeError, TreeResult};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use node::{Attrs, Node, NodeKind};
pub use normalizer::{Normalizer, normalize};

/// Re-exports of commonly used types
pub mod prelude {
	pub use crate::document::Document;
	pub use crate::error::{TreeError, TreeResult};
	pub use crate::ids::{IdGenerator, RandomIds, SequentialIds};
	pub use crate::node::{Attrs, Node, NodeKind};
	pub use crate::normalizer::Normalizer;
}
