//! Render settings
//!
//! Every key is optional. Settings come from a TOML file or the builder
//! methods:
//!
//! ```toml
//! class_prefix = "site"
//! include_keyframes = false
//!
//! [breakpoints]
//! tablet = 1024
//! phone = 640
//! ```

use std::path::Path;

use pagewright_style::{Breakpoints, StyleContext};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Options fixed for the duration of one render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Media query thresholds
	pub breakpoints: Breakpoints,
	/// Prefix of wrapper classes, data attributes and keyframe names
	pub class_prefix: String,
	/// Emit the structural base stylesheet before node CSS
	pub include_base_css: bool,
	/// Emit `@keyframes` for animation types used by the render
	pub include_keyframes: bool,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			breakpoints: Breakpoints::default(),
			class_prefix: "pw".to_string(),
			include_base_css: true,
			include_keyframes: true,
		}
	}
}

impl RenderSettings {
	/// Default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if the file cannot be read, parsed or validated.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
			path: path.to_path_buf(),
			source: e,
		})?;
		let settings = Self::from_toml(&content)?;
		tracing::debug!(path = %path.display(), "loaded render settings");
		Ok(settings)
	}

	/// Parse and validate settings from TOML text
	pub fn from_toml(content: &str) -> SettingsResult<Self> {
		let settings: Self =
			toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Replace the breakpoints
	pub fn with_breakpoints(mut self, tablet: u32, phone: u32) -> Self {
		self.breakpoints = Breakpoints { tablet, phone };
		self
	}

	/// Replace the class prefix
	pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.class_prefix = prefix.into();
		self
	}

	/// Toggle the base stylesheet
	pub fn with_base_css(mut self, enabled: bool) -> Self {
		self.include_base_css = enabled;
		self
	}

	/// Toggle keyframes emission
	pub fn with_keyframes(mut self, enabled: bool) -> Self {
		self.include_keyframes = enabled;
		self
	}

	/// Check that the settings can be interpolated into HTML and CSS.
	///
	/// The prefix must start with an ASCII letter and contain only ASCII
	/// letters, digits and `-`. The phone threshold must be below the
	/// tablet threshold.
	pub fn validate(&self) -> SettingsResult<()> {
		let prefix = &self.class_prefix;
		let valid_prefix = prefix.starts_with(|c: char| c.is_ascii_alphabetic())
			&& prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
		if !valid_prefix {
			return Err(SettingsError::Invalid {
				key: "class_prefix",
				message: format!("{:?} must match [A-Za-z][A-Za-z0-9-]*", prefix),
			});
		}
		let Breakpoints { tablet, phone } = self.breakpoints;
		if phone == 0 || phone >= tablet {
			return Err(SettingsError::Invalid {
				key: "breakpoints",
				message: format!("phone ({}) must be positive and below tablet ({})", phone, tablet),
			});
		}
		Ok(())
	}

	/// Style context handed to the compilers
	pub fn style_context(&self) -> StyleContext {
		StyleContext::new(self.class_prefix.clone()).with_breakpoints(self.breakpoints)
	}
}
