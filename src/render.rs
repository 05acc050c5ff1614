//! The rendering engine
//!
//! Transforms a resource instance into a JSON:API resource document:
//! `type`, `id`, and an `attributes` mapping whose keys are the declared
//! snake_case field names converted to camelCase, in declaration order.
//! Rendering is a pure, synchronous function over immutable inputs;
//! parallel renders need no coordination.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::convert::snake_to_camel_case;
use crate::definition::IDENTIFIER_FIELD;
use crate::error::RenderError;
use crate::instance::ResourceInstance;

/// Which declared attributes a render must include.
///
/// # Examples
///
/// ```
/// use grappelli::AttributeSelector;
///
/// let all = AttributeSelector::All;
/// let subset = AttributeSelector::only(["first_name"]);
/// assert_ne!(all, subset);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeSelector {
	/// Include every declared attribute.
	#[default]
	All,
	/// Include exactly the named attributes. Each name must be a declared
	/// field; an undeclared name fails the render with
	/// [`RenderError::UnknownAttribute`].
	Explicit(Vec<String>),
}

impl AttributeSelector {
	/// Selector over an explicit list of field names.
	pub fn only<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		AttributeSelector::Explicit(names.into_iter().map(Into::into).collect())
	}

	fn selects(&self, name: &str) -> bool {
		match self {
			AttributeSelector::All => true,
			AttributeSelector::Explicit(names) => names.iter().any(|n| n == name),
		}
	}
}

/// A rendered resource document: `type`, `id`, `attributes`, and `links`
/// when link names were requested.
///
/// Attribute key order mirrors field declaration order; the identifier
/// never appears among the attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
	#[serde(rename = "type")]
	pub resource_type: String,
	pub id: Value,
	pub attributes: Map<String, Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Map<String, Value>>,
}

impl RenderedDocument {
	/// The document as a JSON value.
	pub fn to_value(&self) -> Value {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::String(self.resource_type.clone()));
		object.insert("id".to_string(), self.id.clone());
		object.insert("attributes".to_string(), Value::Object(self.attributes.clone()));
		if let Some(links) = &self.links {
			object.insert("links".to_string(), Value::Object(links.clone()));
		}
		Value::Object(object)
	}

	/// Encode the document as a JSON string.
	pub fn dump(&self) -> Result<String, RenderError> {
		Ok(serde_json::to_string(self)?)
	}
}

impl ResourceInstance {
	/// Render this instance into a resource document with no `links`
	/// member.
	///
	/// # Errors
	///
	/// [`RenderError::UnknownAttribute`] when an explicit selector names
	/// an undeclared field, [`RenderError::MissingIdentifier`] when the
	/// instance has no `id` value, and [`RenderError::MissingAttribute`]
	/// when a required field is absent. Nothing is partially rendered on
	/// failure.
	pub fn render(&self, attributes: &AttributeSelector) -> Result<RenderedDocument, RenderError> {
		self.render_with_links(attributes, &[])
	}

	/// Render this instance, resolving the requested link names through
	/// the definition's registered link factories.
	pub fn render_with_links(
		&self,
		attributes: &AttributeSelector,
		links: &[&str],
	) -> Result<RenderedDocument, RenderError> {
		let definition = self.definition();

		if let AttributeSelector::Explicit(names) = attributes {
			for name in names {
				if !definition.has_field(name) {
					return Err(RenderError::UnknownAttribute(name.clone()));
				}
			}
		}

		let id = definition
			.field(IDENTIFIER_FIELD)
			.and_then(|field| self.resolved_value(field))
			.ok_or_else(|| {
				RenderError::MissingIdentifier(definition.resource_name().to_string())
			})?;

		for field in definition.fields() {
			if field.name() == IDENTIFIER_FIELD {
				continue;
			}
			if field.is_required() && self.resolved_value(field).is_none() {
				return Err(RenderError::MissingAttribute(field.name().to_string()));
			}
		}

		let mut attribute_map = Map::new();
		for field in definition.fields() {
			if field.name() == IDENTIFIER_FIELD || !attributes.selects(field.name()) {
				continue;
			}
			let value = self.resolved_value(field).unwrap_or(Value::Null);
			attribute_map.insert(snake_to_camel_case(field.name()), value);
		}

		let link_map = if links.is_empty() {
			None
		} else {
			let mut map = Map::new();
			for name in links {
				let url = definition
					.links()
					.resolve(name, &id)
					.ok_or_else(|| RenderError::UnknownLink((*name).to_string()))?;
				map.insert((*name).to_string(), Value::String(url));
			}
			Some(map)
		};

		debug!(
			resource = definition.resource_name(),
			attributes = attribute_map.len(),
			"rendered resource document"
		);

		Ok(RenderedDocument {
			resource_type: definition.resource_name().to_string(),
			id,
			attributes: attribute_map,
			links: link_map,
		})
	}

	/// Render and encode as a JSON string.
	pub fn dump(&self, attributes: &AttributeSelector) -> Result<String, RenderError> {
		self.render(attributes)?.dump()
	}
}
