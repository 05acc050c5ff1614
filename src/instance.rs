//! Resource instances
//!
//! A [`ResourceInstance`] holds concrete values for a definition's fields.
//! Construction is permissive about required fields — required-ness is a
//! render-time check — but undeclared field names and abstract definitions
//! are rejected here.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::definition::ResourceDefinition;
use crate::error::InstanceError;
use crate::fields::FieldDescriptor;

/// Concrete values conforming to a [`ResourceDefinition`].
///
/// One instance maps deterministically to exactly one rendered document;
/// instances are independent of each other and never mutate their shared
/// definition.
#[derive(Debug, Clone)]
pub struct ResourceInstance {
	definition: Arc<ResourceDefinition>,
	values: HashMap<String, Value>,
}

impl ResourceInstance {
	/// Start building an instance of the given definition.
	pub fn builder(definition: Arc<ResourceDefinition>) -> InstanceBuilder {
		InstanceBuilder {
			definition,
			values: Vec::new(),
		}
	}

	/// Build an instance from any `Serialize` model that serializes to a
	/// JSON object.
	///
	/// Declared fields present in the object are taken; keys the
	/// definition does not declare are ignored, so a model struct may
	/// carry more state than the resource exposes.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use grappelli::{FieldDescriptor, FieldKind, ResourceDefinition, ResourceInstance};
	/// use serde::Serialize;
	/// use serde_json::json;
	///
	/// #[derive(Serialize)]
	/// struct Person {
	/// 	id: i64,
	/// 	first_name: String,
	/// }
	///
	/// let definition = Arc::new(
	/// 	ResourceDefinition::builder("person")
	/// 		.field(FieldDescriptor::new("id", FieldKind::Integer))
	/// 		.field(FieldDescriptor::new("first_name", FieldKind::String))
	/// 		.build()
	/// 		.unwrap(),
	/// );
	///
	/// let guido = Person { id: 1, first_name: "Guido".to_string() };
	/// let instance = ResourceInstance::from_serialize(definition, &guido).unwrap();
	/// assert_eq!(instance.value("first_name"), Some(&json!("Guido")));
	/// ```
	pub fn from_serialize<T: Serialize>(
		definition: Arc<ResourceDefinition>,
		model: &T,
	) -> Result<Self, InstanceError> {
		if definition.is_abstract() {
			return Err(InstanceError::AbstractResource(
				definition.resource_name().to_string(),
			));
		}
		let serialized =
			serde_json::to_value(model).map_err(|err| InstanceError::Serialization {
				resource: definition.resource_name().to_string(),
				message: err.to_string(),
			})?;
		let mut object = match serialized {
			Value::Object(object) => object,
			other => {
				return Err(InstanceError::NotAnObject {
					resource: definition.resource_name().to_string(),
					kind: json_type_name(&other).to_string(),
				});
			}
		};

		let mut values = HashMap::new();
		for field in definition.fields() {
			if let Some(value) = object.remove(field.name()) {
				values.insert(field.name().to_string(), value);
			}
		}
		Ok(Self { definition, values })
	}

	/// The definition this instance conforms to.
	pub fn definition(&self) -> &Arc<ResourceDefinition> {
		&self.definition
	}

	/// The value set for a field, if any. Declared defaults are not
	/// applied here; they are resolved at render time.
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	/// The effective value of a field: the instance value, falling back
	/// to the field's declared default.
	pub(crate) fn resolved_value(&self, field: &FieldDescriptor) -> Option<Value> {
		self.values
			.get(field.name())
			.cloned()
			.or_else(|| field.default().cloned())
	}
}

/// Builder for [`ResourceInstance`].
pub struct InstanceBuilder {
	definition: Arc<ResourceDefinition>,
	values: Vec<(String, Value)>,
}

impl InstanceBuilder {
	/// Set a field value. When the same field is set twice, the last
	/// value wins.
	pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.push((name.into(), value.into()));
		self
	}

	/// Validate the collected values against the definition and produce
	/// the instance.
	pub fn build(self) -> Result<ResourceInstance, InstanceError> {
		if self.definition.is_abstract() {
			return Err(InstanceError::AbstractResource(
				self.definition.resource_name().to_string(),
			));
		}
		for (name, _) in &self.values {
			if !self.definition.has_field(name) {
				return Err(InstanceError::UnknownField {
					resource: self.definition.resource_name().to_string(),
					field: name.clone(),
				});
			}
		}
		Ok(ResourceInstance {
			definition: self.definition,
			values: self.values.into_iter().collect(),
		})
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
