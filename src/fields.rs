//! Typed field declarations
//!
//! A resource definition is an ordered list of [`FieldDescriptor`]s; each
//! descriptor carries the declared name, a type tag, a required flag, and
//! an optional default value.

use serde_json::Value;

/// Type tag attached to a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	String,
	Integer,
	Float,
	Boolean,
	Object,
	Array,
}

/// A single declared field of a resource definition.
///
/// A field is required unless it is marked [`optional`](Self::optional) or
/// carries a default value. Required-ness is checked when an instance is
/// rendered, not when it is constructed.
///
/// # Examples
///
/// ```
/// use grappelli::fields::{FieldDescriptor, FieldKind};
///
/// let field = FieldDescriptor::new("first_name", FieldKind::String);
/// assert!(field.is_required());
///
/// let field = FieldDescriptor::new("nickname", FieldKind::String).optional();
/// assert!(!field.is_required());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	name: String,
	kind: FieldKind,
	required: bool,
	default: Option<Value>,
}

impl FieldDescriptor {
	/// Declare a required field with no default.
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			kind,
			required: true,
			default: None,
		}
	}

	/// Mark the field optional: it may be absent on an instance and
	/// renders as `null` when selected.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Attach a default value, used whenever an instance carries no value
	/// for this field. A defaulted field is never required.
	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = Some(default.into());
		self.required = false;
		self
	}

	/// The declared field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The declared type tag.
	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	/// Whether rendering fails when the instance has no value for this
	/// field.
	pub fn is_required(&self) -> bool {
		self.required
	}

	/// The declared default value, if any.
	pub fn default(&self) -> Option<&Value> {
		self.default.as_ref()
	}
}
