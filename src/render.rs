//! Rendering module.
//!
//! The renderer, its settings and its error types.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "render")]
//! use pagewright::render::{RenderSettings, Renderer};
//! ```

#[cfg(feature = "render")]
pub use pagewright_render::*;
