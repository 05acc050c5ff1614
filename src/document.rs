//! Top-level JSON:API document assembly
//!
//! Wraps one resource instance or a collection as the primary data of a
//! `{"data": ...}` document, with optional document-level links.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RenderError;
use crate::instance::ResourceInstance;
use crate::render::AttributeSelector;

/// Primary data carried by a document: one resource or a collection.
#[derive(Debug, Clone)]
pub enum PrimaryData {
	Single(ResourceInstance),
	Collection(Vec<ResourceInstance>),
}

/// Assembles `{"data": ...}` documents from resource instances.
///
/// Every wrapped instance is rendered with the same attribute selector and
/// resource link names. Document-level links are plain name → URL pairs
/// set on the document itself.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grappelli::{
/// 	AttributeSelector, FieldDescriptor, FieldKind, JsonApiDocument, ResourceDefinition,
/// 	ResourceInstance,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let article = Arc::new(
/// 	ResourceDefinition::builder("article")
/// 		.field(FieldDescriptor::new("id", FieldKind::Integer))
/// 		.field(FieldDescriptor::new("title", FieldKind::String))
/// 		.build()?,
/// );
/// let instance = ResourceInstance::builder(article)
/// 	.set("id", 1)
/// 	.set("title", "J'accuse...!")
/// 	.build()?;
///
/// let value = JsonApiDocument::single(instance)
/// 	.with_link("self", "http://example.com/articles/1")
/// 	.to_value()?;
///
/// assert_eq!(value["data"]["type"], "article");
/// assert_eq!(value["links"]["self"], "http://example.com/articles/1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonApiDocument {
	data: PrimaryData,
	attributes: AttributeSelector,
	resource_links: Vec<String>,
	links: Map<String, Value>,
}

impl JsonApiDocument {
	/// Document whose primary data is a single resource.
	pub fn single(instance: ResourceInstance) -> Self {
		Self::new(PrimaryData::Single(instance))
	}

	/// Document whose primary data is a collection of resources.
	pub fn collection(instances: impl IntoIterator<Item = ResourceInstance>) -> Self {
		Self::new(PrimaryData::Collection(instances.into_iter().collect()))
	}

	fn new(data: PrimaryData) -> Self {
		Self {
			data,
			attributes: AttributeSelector::All,
			resource_links: Vec::new(),
			links: Map::new(),
		}
	}

	/// Attribute selector applied to every rendered resource. Defaults to
	/// all declared attributes.
	pub fn with_attributes(mut self, attributes: AttributeSelector) -> Self {
		self.attributes = attributes;
		self
	}

	/// Resource-level link names resolved on every rendered resource.
	pub fn with_resource_links<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.resource_links = names.into_iter().map(Into::into).collect();
		self
	}

	/// Attach a document-level link.
	pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
		self.links.insert(name.into(), Value::String(url.into()));
		self
	}

	/// Render the document as a JSON value.
	pub fn to_value(&self) -> Result<Value, RenderError> {
		let link_names: Vec<&str> = self.resource_links.iter().map(String::as_str).collect();
		let data = match &self.data {
			PrimaryData::Single(instance) => instance
				.render_with_links(&self.attributes, &link_names)?
				.to_value(),
			PrimaryData::Collection(instances) => {
				let mut rendered = Vec::with_capacity(instances.len());
				for instance in instances {
					rendered.push(
						instance
							.render_with_links(&self.attributes, &link_names)?
							.to_value(),
					);
				}
				Value::Array(rendered)
			}
		};

		let mut object = Map::new();
		object.insert("data".to_string(), data);
		if !self.links.is_empty() {
			object.insert("links".to_string(), Value::Object(self.links.clone()));
		}

		debug!(links = self.links.len(), "assembled document");

		Ok(Value::Object(object))
	}

	/// Render and encode the document as a JSON string.
	pub fn dump(&self) -> Result<String, RenderError> {
		Ok(serde_json::to_string(&self.to_value()?)?)
	}
}
