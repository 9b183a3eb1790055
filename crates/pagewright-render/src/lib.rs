//! # pagewright-render
//!
//! Renders canonical content trees to `{ html, css }`.
//!
//! ## Architecture
//!
//! ```text
//! pagewright-render
//! ├── renderer    - depth-first walk, wrappers, per-call stylesheet
//! ├── structural  - section / row / column style schemas
//! ├── base        - structural base stylesheet and visibility classes
//! ├── settings    - breakpoints, class prefix, output toggles (TOML)
//! └── error       - RenderError, SettingsError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewright_render::prelude::*;
//! use serde_json::json;
//!
//! let renderer = Renderer::default();
//! let output = renderer
//!     .render_value(&json!({"version": "1", "content": [{"type": "heading", "text": "Hello"}]}))
//!     .unwrap();
//!
//! assert!(output.html.contains("<h2 class=\"pw-heading\">Hello</h2>"));
//! assert!(output.css.starts_with(".pw-section {"));
//! ```
//!
//! A [`Renderer`] holds no per-call state: every call owns its stylesheet,
//! so a shared renderer may be used from many threads at once.

pub mod base;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod structural;

pub use error::{RenderError, RenderResult, SettingsError, SettingsResult};
pub use renderer::{RenderOutput, Renderer};
pub use settings::RenderSettings;

/// Re-exports of commonly used types
pub mod prelude {
	pub use crate::error::{RenderError, RenderResult, SettingsError};
	pub use crate::renderer::{RenderOutput, Renderer};
	pub use crate::settings::RenderSettings;
}
