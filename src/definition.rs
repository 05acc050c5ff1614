//! Resource definitions
//!
//! A [`ResourceDefinition`] is the declared schema for one kind of domain
//! entity: an ordered field list, the resource name used as the JSON:API
//! `type`, and optional link factories. Definitions are built once through
//! [`ResourceDefinitionBuilder`] and treated as immutable for the rest of
//! the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::DefinitionError;
use crate::fields::FieldDescriptor;
use crate::links::LinkRegistry;

/// The field conventionally designated as the resource identifier.
pub const IDENTIFIER_FIELD: &str = "id";

/// Field names that collide with JSON:API document members and cannot be
/// declared as attributes.
const RESERVED_FIELD_NAMES: [&str; 3] = ["type", "links", "relationships"];

/// The declared schema for one kind of resource.
///
/// Every instance built from a definition renders with the definition's
/// resource name as `type` and its declared non-identifier fields as
/// `attributes`, in declaration order. Definitions are `Send + Sync`;
/// share them behind `Arc` (or a `LazyLock`) and render from as many
/// threads as needed.
///
/// # Examples
///
/// ```
/// use grappelli::{FieldDescriptor, FieldKind, ResourceDefinition};
///
/// let person = ResourceDefinition::builder("person")
/// 	.field(FieldDescriptor::new("id", FieldKind::Integer))
/// 	.field(FieldDescriptor::new("first_name", FieldKind::String))
/// 	.field(FieldDescriptor::new("last_name", FieldKind::String))
/// 	.build()
/// 	.unwrap();
///
/// assert_eq!(person.resource_name(), "person");
/// assert_eq!(person.attribute_names(), ["first_name", "last_name"]);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceDefinition {
	resource_name: String,
	fields: Vec<FieldDescriptor>,
	field_index: HashMap<String, usize>,
	links: LinkRegistry,
	is_abstract: bool,
}

impl ResourceDefinition {
	/// Start declaring a definition with the given resource name.
	pub fn builder(resource_name: impl Into<String>) -> ResourceDefinitionBuilder {
		ResourceDefinitionBuilder {
			resource_name: resource_name.into(),
			fields: Vec::new(),
			links: LinkRegistry::new(),
			is_abstract: false,
		}
	}

	/// The JSON:API `type` value for every instance of this definition.
	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}

	/// All declared fields, in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Look up a declared field by name.
	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.field_index.get(name).map(|&position| &self.fields[position])
	}

	/// Whether a field of that name was declared.
	pub fn has_field(&self, name: &str) -> bool {
		self.field_index.contains_key(name)
	}

	/// Declared field names, in declaration order.
	pub fn field_names(&self) -> Vec<String> {
		self.fields.iter().map(|f| f.name().to_string()).collect()
	}

	/// Declared field names excluding the identifier, in declaration
	/// order. These are the names eligible to appear in `attributes`.
	pub fn attribute_names(&self) -> Vec<String> {
		self.fields
			.iter()
			.filter(|f| f.name() != IDENTIFIER_FIELD)
			.map(|f| f.name().to_string())
			.collect()
	}

	/// Fields whose absence on an instance fails a render.
	pub fn required_fields(&self) -> Vec<&FieldDescriptor> {
		self.fields.iter().filter(|f| f.is_required()).collect()
	}

	/// Fields that may be absent on an instance.
	pub fn optional_fields(&self) -> Vec<&FieldDescriptor> {
		self.fields.iter().filter(|f| !f.is_required()).collect()
	}

	/// Whether this definition only exists to be extended.
	pub fn is_abstract(&self) -> bool {
		self.is_abstract
	}

	/// The link factories registered on this definition.
	pub fn links(&self) -> &LinkRegistry {
		&self.links
	}

	/// Registered link names, in registration order.
	pub fn link_names(&self) -> &[String] {
		self.links.names()
	}
}

/// Builder for [`ResourceDefinition`].
///
/// Declaration-time rules are enforced by [`build`](Self::build): reserved
/// and duplicate field names are rejected, and a concrete definition must
/// declare an `id` field. A definition marked
/// [`abstract_resource`](Self::abstract_resource) may omit `id` but cannot
/// be instantiated; it exists to be extended.
pub struct ResourceDefinitionBuilder {
	resource_name: String,
	fields: Vec<FieldDescriptor>,
	links: LinkRegistry,
	is_abstract: bool,
}

impl ResourceDefinitionBuilder {
	/// Declare a field. Declaration order is the attribute order of every
	/// rendered document.
	pub fn field(mut self, field: FieldDescriptor) -> Self {
		self.fields.push(field);
		self
	}

	/// Copy the fields of a base definition, at this position in the
	/// declaration order. Names already declared on this builder are kept
	/// rather than overridden, so an extending definition wins over its
	/// base.
	pub fn extends(mut self, base: &ResourceDefinition) -> Self {
		for field in base.fields() {
			if !self.fields.iter().any(|own| own.name() == field.name()) {
				self.fields.push(field.clone());
			}
		}
		self
	}

	/// Mark the definition abstract: it may omit the `id` field but can
	/// only be extended, never instantiated.
	pub fn abstract_resource(mut self) -> Self {
		self.is_abstract = true;
		self
	}

	/// Register a named link factory. The factory receives the instance
	/// identifier and returns the URL placed under that name in the
	/// rendered `links` object.
	pub fn link(
		mut self,
		name: impl Into<String>,
		factory: impl Fn(&Value) -> String + Send + Sync + 'static,
	) -> Self {
		self.links.register(name, Arc::new(factory));
		self
	}

	/// Validate the declaration and produce the immutable definition.
	pub fn build(self) -> Result<ResourceDefinition, DefinitionError> {
		let mut field_index = HashMap::with_capacity(self.fields.len());
		for (position, field) in self.fields.iter().enumerate() {
			if RESERVED_FIELD_NAMES.contains(&field.name()) {
				return Err(DefinitionError::ReservedFieldName(field.name().to_string()));
			}
			if field_index.insert(field.name().to_string(), position).is_some() {
				return Err(DefinitionError::DuplicateField(field.name().to_string()));
			}
		}
		if !self.is_abstract && !field_index.contains_key(IDENTIFIER_FIELD) {
			return Err(DefinitionError::MissingIdentifier);
		}

		Ok(ResourceDefinition {
			resource_name: self.resource_name,
			fields: self.fields,
			field_index,
			links: self.links,
			is_abstract: self.is_abstract,
		})
	}
}
