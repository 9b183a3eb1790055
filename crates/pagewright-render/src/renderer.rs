//! Tree renderer
//!
//! [`Renderer::render`] walks the canonical tree depth first. Structural
//! nodes become wrapper `<div>`s, modules are dispatched through the
//! registry. CSS is collected in a [`StyleSheet`] owned by the call, so one
//! renderer can serve any number of threads at once.

use pagewright_modules::html::{attribute, escape, safe_url};
use pagewright_modules::{ModuleAttrs, ModuleRegistry, StyleUses};
use pagewright_style::families::{animation, background, declarative, motion};
use pagewright_style::prelude::*;
use pagewright_style::sanitize::escape_css_string;
use pagewright_style::value::{attr_flag, attr_str};
use pagewright_tree::{Document, Node, NodeKind, Normalizer};
use serde::Serialize;
use serde_json::Value;

use crate::base::base_css;
use crate::error::RenderResult;
use crate::settings::RenderSettings;
use crate::structural::{self, StructuralStyle};

/// Markup and stylesheet produced by one render call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
	/// Page markup
	pub html: String,
	/// Page stylesheet
	pub css: String,
}

/// Renders canonical trees to HTML and CSS
#[derive(Debug, Clone)]
pub struct Renderer {
	registry: ModuleRegistry,
	settings: RenderSettings,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new(ModuleRegistry::with_builtin(), RenderSettings::default())
	}
}

impl Renderer {
	/// Create a renderer over `registry`
	pub fn new(registry: ModuleRegistry, settings: RenderSettings) -> Self {
		Self { registry, settings }
	}

	/// Module registry in use
	pub fn registry(&self) -> &ModuleRegistry {
		&self.registry
	}

	/// Settings in use
	pub fn settings(&self) -> &RenderSettings {
		&self.settings
	}

	/// Render a canonical forest of sections.
	///
	/// # Errors
	///
	/// Returns [`RenderError::Registry`](crate::RenderError::Registry) for the
	/// first module whose type is not registered; nothing is rendered in that
	/// case. Returns [`RenderError::Settings`](crate::RenderError::Settings)
	/// when the settings fail validation.
	pub fn render(&self, tree: &[Node]) -> RenderResult<RenderOutput> {
		self.settings.validate()?;
		let mut pass = RenderPass {
			registry: &self.registry,
			ctx: self.settings.style_context(),
			sheet: StyleSheet::new(),
			nodes: 0,
			warnings: 0,
		};
		let mut html = String::new();
		for node in tree {
			pass.node(node, &mut html)?;
		}

		let RenderPass {
			ctx,
			sheet,
			nodes,
			warnings,
			..
		} = pass;
		let mut css = String::new();
		if self.settings.include_base_css && !tree.is_empty() {
			css.push_str(&base_css(&ctx));
		}
		css.push_str(&sheet.finish(&ctx.class_prefix, self.settings.include_keyframes));

		tracing::debug!(
			nodes,
			warnings,
			html_bytes = html.len(),
			css_bytes = css.len(),
			"rendered tree"
		);
		Ok(RenderOutput { html, css })
	}

	/// Render the content of a normalized document
	pub fn render_document(&self, document: &Document) -> RenderResult<RenderOutput> {
		self.render(&document.content)
	}

	/// Normalize loosely-typed input, then render it.
	///
	/// Accepts a bare list or a `{ version, content }` envelope. Missing ids
	/// are generated randomly.
	pub fn render_value(&self, input: &Value) -> RenderResult<RenderOutput> {
		let mut normalizer = Normalizer::new();
		let document = Document::from_value(input, &mut normalizer)?;
		self.render_document(&document)
	}
}

/// State of one render call
struct RenderPass<'r> {
	registry: &'r ModuleRegistry,
	ctx: StyleContext,
	sheet: StyleSheet,
	nodes: usize,
	warnings: usize,
}

impl RenderPass<'_> {
	fn node(&mut self, node: &Node, out: &mut String) -> RenderResult<()> {
		self.nodes += 1;
		match (&node.kind, structural::style_for(&node.kind)) {
			(NodeKind::Module(type_key), _) => self.module(node, type_key, out),
			(_, Some(style)) => self.structural(node, style, out),
			(_, None) => Ok(()),
		}
	}

	fn structural(
		&mut self,
		node: &Node,
		style: &'static StructuralStyle,
		out: &mut String,
	) -> RenderResult<()> {
		let resolved = resolve(&style.schema, &Attrs::new(), &node.attrs);
		self.warnings += resolved.warnings.len();
		let selector = self.selector(node);
		self.compile_styles(StyleUses::ALL, &resolved.attrs, &selector);
		self.sheet.push(declarative::compile(
			style.descriptors,
			&resolved.attrs,
			&selector,
			&self.ctx,
		));

		let mut inner = String::new();
		for child in &node.children {
			self.node(child, &mut inner)?;
		}
		if style.inner {
			inner = format!(
				"<div class=\"{}-{}-inner\">{}</div>",
				self.ctx.class_prefix, style.class, inner
			);
		}
		let body = format!("{}{}", self.video(&resolved.attrs, StyleUses::ALL), inner);
		let classes = vec![format!("{}-{}", self.ctx.class_prefix, style.class)];
		out.push_str(&self.wrap(node, &resolved.attrs, StyleUses::ALL, classes, None, &body));
		Ok(())
	}

	fn module(&mut self, node: &Node, type_key: &str, out: &mut String) -> RenderResult<()> {
		let registry = self.registry;
		let capability = registry.resolve(type_key)?;
		let resolved = resolve(
			capability.schema(),
			&capability.default_style_values(),
			&node.attrs,
		);
		self.warnings += resolved.warnings.len();
		let uses = capability.uses();
		let selector = self.selector(node);
		self.compile_styles(uses, &resolved.attrs, &selector);
		self.sheet.push(capability.generate_css(&resolved.attrs, &selector, &self.ctx));

		let mut inner = String::new();
		if capability.accepts_children() {
			for child in &node.children {
				self.node(child, &mut inner)?;
			}
		} else if !node.children.is_empty() {
			tracing::debug!(
				module = %type_key,
				id = %node.id,
				children = node.children.len(),
				"module does not accept children, skipping them"
			);
		}

		let view = ModuleAttrs::new(&resolved.attrs, capability.schema(), &self.ctx.class_prefix);
		let body = format!(
			"{}{}",
			self.video(&resolved.attrs, uses),
			capability.render(&view, &inner)
		);
		let classes = vec![
			format!("{}-module", self.ctx.class_prefix),
			format!("{}-module--{}", self.ctx.class_prefix, clean_token(type_key)),
		];
		out.push_str(&self.wrap(node, &resolved.attrs, uses, classes, Some(type_key), &body));
		Ok(())
	}

	/// Attribute selector anchoring a node's CSS
	fn selector(&self, node: &Node) -> String {
		format!(
			"[data-{}-id=\"{}\"]",
			self.ctx.class_prefix,
			escape_css_string(&node.id)
		)
	}

	fn compile_styles(&mut self, uses: StyleUses, attrs: &Attrs, selector: &str) {
		for family in uses.families() {
			self.sheet.push(family.compile(attrs, selector, &self.ctx));
		}
		if uses.use_animation
			&& let Some(kind) = animation::animation_type(attrs)
		{
			self.sheet.use_animation(&kind);
		}
	}

	/// `<video>` layer for a video background with a safe source
	fn video(&self, attrs: &Attrs, uses: StyleUses) -> String {
		if !uses.use_background {
			return String::new();
		}
		let Some(video) = background::video_background(attrs) else {
			return String::new();
		};
		let src = safe_url(video.url.trim(), "");
		if src.is_empty() {
			return String::new();
		}
		let mut tag = format!("<video class=\"{}-video-background\"", self.ctx.class_prefix);
		tag.push_str(&attribute("src", src));
		if let Some(poster) = video.poster.as_deref().map(|poster| safe_url(poster.trim(), ""))
			&& !poster.is_empty()
		{
			tag.push_str(&attribute("poster", poster));
		}
		for (enabled, flag) in [
			(video.looped, "loop"),
			(video.muted, "muted"),
			(video.autoplay, "autoplay"),
		] {
			if enabled {
				tag.push(' ');
				tag.push_str(flag);
			}
		}
		tag.push_str(" playsinline></video>");
		tag
	}

	/// Wrapper `<div>` with classes, ids and script data attributes
	fn wrap(
		&self,
		node: &Node,
		attrs: &Attrs,
		uses: StyleUses,
		mut classes: Vec<String>,
		module_type: Option<&str>,
		body: &str,
	) -> String {
		let prefix = &self.ctx.class_prefix;
		for (key, breakpoint) in [
			("disable_on_desktop", "desktop"),
			("disable_on_tablet", "tablet"),
			("disable_on_phone", "phone"),
		] {
			if attr_flag(attrs, key) {
				classes.push(format!("{}-hide-{}", prefix, breakpoint));
			}
		}
		if let Some(custom) = attr_str(attrs, "css_class") {
			classes.extend(
				custom
					.split_whitespace()
					.map(clean_token)
					.filter(|class| !class.is_empty()),
			);
		}

		let mut tag = format!("<div class=\"{}\"", escape(&classes.join(" ")));
		if let Some(css_id) = attr_str(attrs, "css_id") {
			tag.push_str(&attribute("id", css_id.trim()));
		}
		tag.push_str(&attribute(&format!("data-{}-id", prefix), &node.id));
		if let Some(type_key) = module_type {
			tag.push_str(&attribute(&format!("data-{}-type", prefix), type_key));
		}
		let mut data = Vec::new();
		if uses.use_animation {
			data.extend(animation::data_attributes(attrs, &self.ctx));
		}
		if uses.use_motion {
			data.extend(motion::data_attributes(attrs, &self.ctx));
		}
		for (name, value) in data {
			tag.push_str(&attribute(&name, &value));
		}
		format!("{}>{}</div>", tag, body)
	}
}

/// Keep ASCII letters, digits, `-` and `_`
fn clean_token(value: &str) -> String {
	value
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagewright_modules::RegistryError;
	use rstest::rstest;
	use serde_json::json;

	use crate::error::RenderError;

	fn bare() -> Renderer {
		Renderer::new(
			ModuleRegistry::with_builtin(),
			RenderSettings::new().with_base_css(false),
		)
	}

	fn page(module: Node) -> Vec<Node> {
		vec![Node::section("s").with_child(Node::row("r").with_child(Node::column("c").with_child(module)))]
	}

	#[rstest]
	fn test_structural_wrappers() {
		// Arrange
		let tree = page(Node::module("t", "text").with_attr("content", "Hi"));

		// Act
		let output = bare().render(&tree).unwrap();

		// Assert
		assert_eq!(
			output.html,
			concat!(
				"<div class=\"pw-section\" data-pw-id=\"s\"><div class=\"pw-section-inner\">",
				"<div class=\"pw-row\" data-pw-id=\"r\">",
				"<div class=\"pw-column\" data-pw-id=\"c\">",
				"<div class=\"pw-module pw-module--text\" data-pw-id=\"t\" data-pw-type=\"text\">",
				"<div class=\"pw-text\"><p>Hi</p></div>",
				"</div></div></div></div></div>"
			)
		);
		assert_eq!(output.css, "");
	}

	#[rstest]
	fn test_unknown_module_aborts() {
		let tree = page(Node::module("x", "carousel"));

		let result = bare().render(&tree);

		assert!(matches!(
			result,
			Err(RenderError::Registry(RegistryError::UnknownModuleType(ref key))) if key == "carousel"
		));
	}

	#[rstest]
	fn test_node_css_scoped_to_id() {
		// Arrange
		let module = Node::module("h1", "heading")
			.with_attr("margin", json!({"top": "10", "right": "10", "bottom": "10", "left": "10", "unit": "px"}))
			.with_attr("text_color__hover", "#f00");

		// Act
		let output = bare().render(&page(module)).unwrap();

		// Assert
		assert!(output.css.contains("[data-pw-id=\"h1\"] {\n    margin: 10px;\n}\n"));
		assert!(output.css.contains("[data-pw-id=\"h1\"]:hover .pw-heading {\n    color: #f00;\n}\n"));
	}

	#[rstest]
	fn test_visibility_and_custom_attributes() {
		let module = Node::module("b", "button")
			.with_attr("disable_on_phone", "on")
			.with_attr("css_class", "cta  big\"><script>")
			.with_attr("css_id", "buy-now\"");

		let output = bare().render(&page(module)).unwrap();

		assert!(output.html.contains(
			"<div class=\"pw-module pw-module--button pw-hide-phone cta bigscript\" id=\"buy-now&quot;\" data-pw-id=\"b\""
		));
	}

	#[rstest]
	fn test_scroll_animation_data_and_keyframes() {
		// Arrange
		let module = Node::module("a", "text")
			.with_attr("animation", json!({"type": "fade", "trigger": "scroll", "scroll_offset": "50"}));

		// Act
		let output = bare().render(&page(module)).unwrap();

		// Assert
		assert!(output.html.contains("data-pw-animation=\"fade\" data-pw-offset=\"50\""));
		assert!(output.css.contains("[data-pw-id=\"a\"] {\n    opacity: 0;\n}\n"));
		assert!(output.css.contains("[data-pw-id=\"a\"].pw-animated {\n    animation: pw-fade"));
		assert_eq!(output.css.matches("@keyframes pw-fade ").count(), 1);
	}

	#[rstest]
	fn test_keyframes_can_be_disabled() {
		let renderer = Renderer::new(
			ModuleRegistry::with_builtin(),
			RenderSettings::new().with_base_css(false).with_keyframes(false),
		);
		let module = Node::module("a", "text").with_attr("animation", json!({"type": "bounce"}));

		let output = renderer.render(&page(module)).unwrap();

		assert!(output.css.contains("animation: pw-bounce"));
		assert!(!output.css.contains("@keyframes"));
	}

	#[rstest]
	fn test_video_background_on_section() {
		// Arrange
		let section = Node::section("v").with_attr(
			"background",
			json!({"type": "video", "video": {"url": "https://cdn.example.com/a.mp4", "poster": "/p.jpg", "loop": false}}),
		);

		// Act
		let output = bare().render(&[section]).unwrap();

		// Assert
		assert!(output.html.starts_with(
			"<div class=\"pw-section\" data-pw-id=\"v\"><video class=\"pw-video-background\" src=\"https://cdn.example.com/a.mp4\" poster=\"/p.jpg\" muted autoplay playsinline></video><div class=\"pw-section-inner\">"
		));
	}

	#[rstest]
	fn test_nested_module_children() {
		// Arrange
		let accordion = Node::module("acc", "accordion")
			.with_child(Node::module("i1", "accordion_item").with_attr("title", "One"))
			.with_child(Node::module("i2", "accordion_item").with_attr("title", "Two"));

		// Act
		let output = bare().render(&page(accordion)).unwrap();

		// Assert
		let first = output.html.find("data-pw-id=\"i1\"").unwrap();
		let second = output.html.find("data-pw-id=\"i2\"").unwrap();
		assert!(first < second);
		assert!(output.html.contains("<div class=\"pw-accordion\" data-pw-open-first=\"true\"><div class=\"pw-module pw-module--accordion_item\""));
	}

	#[rstest]
	fn test_leaf_module_children_skipped() {
		let text = Node::module("t", "text").with_child(Node::module("inner", "heading"));

		let output = bare().render(&page(text)).unwrap();

		assert!(!output.html.contains("inner"));
	}

	#[rstest]
	fn test_base_css_only_for_non_empty_trees() {
		let renderer = Renderer::default();

		let empty = renderer.render(&[]).unwrap();
		let full = renderer.render(&[Node::section("s")]).unwrap();

		assert_eq!(empty, RenderOutput::default());
		assert!(full.css.starts_with(".pw-section {"));
	}

	#[rstest]
	fn test_invalid_settings_rejected() {
		let renderer = Renderer::new(
			ModuleRegistry::with_builtin(),
			RenderSettings::new().with_class_prefix("x\"y"),
		);

		let result = renderer.render(&[Node::section("s")]);

		assert!(matches!(result, Err(RenderError::Settings(_))));
	}

	#[rstest]
	fn test_similar_ids_get_distinct_selectors() {
		// Arrange
		let tree = vec![
			Node::section("hero.1").with_attr("background", json!({"type": "color", "color": "red"})),
			Node::section("hero1").with_attr("background", json!({"type": "color", "color": "blue"})),
			Node::section("секция").with_attr("background", json!({"type": "color", "color": "green"})),
		];

		// Act
		let output = bare().render(&tree).unwrap();

		// Assert
		for (id, color) in [("hero.1", "red"), ("hero1", "blue"), ("секция", "green")] {
			assert!(output.html.contains(&format!("data-pw-id=\"{}\"", id)));
			assert!(output.css.contains(&format!(
				"[data-pw-id=\"{}\"] {{\n    background-color: {};\n}}\n",
				id, color
			)));
		}
		assert_eq!(output.css.matches("background-color").count(), 3);
	}

	#[rstest]
	fn test_hostile_id_escaped_in_selector_and_attribute() {
		let tree = vec![Node::section("x\"] body {").with_attr("background", json!({"type": "color", "color": "red"}))];

		let output = bare().render(&tree).unwrap();

		assert!(output.html.contains("data-pw-id=\"x&quot;] body {\""));
		assert!(output.css.starts_with("[data-pw-id=\"x\\22 ] body \\7b \"] {\n"));
		assert_eq!(output.css.matches('{').count(), output.css.matches('}').count());
	}

	#[rstest]
	#[case("section_1", "section_1")]
	#[case("a\"] {x}", "ax")]
	fn test_clean_token(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(clean_token(input), expected);
	}
}
