//! Field schemas
//!
//! A [`FieldSchema`] lists the fields a module (or structural node) knows
//! about, with their defaults and variant support. The resolver uses it to
//! turn sparse explicit attributes into a total map.

use std::fmt;

use serde_json::Value;

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Plain text, HTML-escaped on output
	Text,
	/// Raw markup or code, emitted verbatim
	Raw,
	/// Numeric value, optionally range-checked
	Number,
	/// Boolean switch
	Toggle,
	/// CSS color
	Color,
	/// One of a fixed set of options
	Select,
	/// Nested structure (spacing box, background, animation, motion)
	Structured,
}

/// Hook validating a resolved structured value in place
pub type FieldValidator = fn(field: &str, value: &mut Value) -> Vec<RangeWarning>;

/// A numeric value that was outside its configured range and got clamped
#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
	/// Attribute path of the offending value
	pub field: String,
	/// Value as supplied
	pub value: f64,
	/// Lower bound
	pub min: f64,
	/// Upper bound
	pub max: f64,
	/// Value after clamping
	pub clamped: f64,
}

impl RangeWarning {
	/// Clamp `value` into `[min, max]`, returning a warning when it moved
	pub fn check(field: impl Into<String>, value: f64, min: f64, max: f64) -> Option<Self> {
		let clamped = value.clamp(min, max);
		(clamped != value).then(|| Self {
			field: field.into(),
			value,
			min,
			max,
			clamped,
		})
	}
}

impl fmt::Display for RangeWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} = {} is outside [{}, {}], clamped to {}",
			self.field, self.value, self.min, self.max, self.clamped
		)
	}
}

/// One field of a schema
#[derive(Debug, Clone)]
pub struct FieldSpec {
	/// Base attribute key
	pub name: String,
	/// Value kind
	pub kind: FieldKind,
	/// Default value, `Null` when the field has none
	pub default: Value,
	/// Accepts `__tablet` / `__phone` variants
	pub responsive: bool,
	/// Accepts a `__hover` variant
	pub hover: bool,
	/// Inclusive numeric range
	pub range: Option<(f64, f64)>,
	/// Validation hook for structured values
	pub validator: Option<FieldValidator>,
}

impl FieldSpec {
	/// Field without default
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			kind,
			default: Value::Null,
			responsive: false,
			hover: false,
			range: None,
			validator: None,
		}
	}

	/// Text field
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Text)
	}

	/// Raw markup field, never escaped
	pub fn raw(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Raw)
	}

	/// Numeric field
	pub fn number(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Number)
	}

	/// Toggle field
	pub fn toggle(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Toggle)
	}

	/// Color field
	pub fn color(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Color)
	}

	/// Select field
	pub fn select(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Select)
	}

	/// Structured field with a default structure
	pub fn structured(name: impl Into<String>, default: Value) -> Self {
		Self::new(name, FieldKind::Structured).default(default)
	}

	/// Set the default value
	pub fn default(mut self, value: impl Into<Value>) -> Self {
		self.default = value.into();
		self
	}

	/// Accept tablet and mobile variants
	pub fn responsive(mut self) -> Self {
		self.responsive = true;
		self
	}

	/// Accept a hover variant
	pub fn hover(mut self) -> Self {
		self.hover = true;
		self
	}

	/// Clamp numeric values into `[min, max]`
	pub fn range(mut self, min: f64, max: f64) -> Self {
		self.range = Some((min, max));
		self
	}

	/// Attach a validation hook
	pub fn validator(mut self, validator: FieldValidator) -> Self {
		self.validator = Some(validator);
		self
	}
}

/// Ordered set of fields
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
	fields: Vec<FieldSpec>,
}

impl FieldSchema {
	/// Empty schema
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a field, replacing any field with the same name
	pub fn field(mut self, spec: FieldSpec) -> Self {
		self.insert(spec);
		self
	}

	/// Add several fields
	pub fn fields(mut self, specs: impl IntoIterator<Item = FieldSpec>) -> Self {
		for spec in specs {
			self.insert(spec);
		}
		self
	}

	fn insert(&mut self, spec: FieldSpec) {
		match self.fields.iter_mut().find(|field| field.name == spec.name) {
			Some(existing) => *existing = spec,
			None => self.fields.push(spec),
		}
	}

	/// Look up a field by base name
	pub fn get(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Fields in declaration order
	pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
		self.fields.iter()
	}

	/// Number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the schema has no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Whether `key` (or the base field of a variant key) is declared raw
	pub fn is_raw(&self, key: &str) -> bool {
		let base = key.split("__").next().unwrap_or(key);
		self.get(base)
			.is_some_and(|field| field.kind == FieldKind::Raw)
	}
}
