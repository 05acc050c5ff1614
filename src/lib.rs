//! # Grappelli
//!
//! Dump typed resource models into JSON:API documents.
//!
//! A resource is declared once as an immutable [`ResourceDefinition`] — an
//! ordered list of typed fields plus the resource name used as the JSON:API
//! `type` — and every [`ResourceInstance`] built from it renders into a
//! `{type, id, attributes}` document. Attribute names are converted from
//! snake_case declarations to camelCase output, and the caller selects
//! which attributes to include with an [`AttributeSelector`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use grappelli::{
//! 	AttributeSelector, FieldDescriptor, FieldKind, ResourceDefinition, ResourceInstance,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let person = Arc::new(
//! 	ResourceDefinition::builder("person")
//! 		.field(FieldDescriptor::new("id", FieldKind::Integer))
//! 		.field(FieldDescriptor::new("first_name", FieldKind::String))
//! 		.field(FieldDescriptor::new("last_name", FieldKind::String))
//! 		.build()?,
//! );
//!
//! let guido = ResourceInstance::builder(Arc::clone(&person))
//! 	.set("id", 1)
//! 	.set("first_name", "Guido")
//! 	.set("last_name", "Van Rossum")
//! 	.build()?;
//!
//! let document = guido.render(&AttributeSelector::All)?;
//! assert_eq!(document.resource_type, "person");
//! assert_eq!(document.attributes["firstName"], "Guido");
//! assert_eq!(document.attributes["lastName"], "Van Rossum");
//!
//! let subset = guido.render(&AttributeSelector::only(["first_name"]))?;
//! assert_eq!(subset.attributes.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Models that implement `serde::Serialize` can skip the instance builder
//! via [`ResourceInstance::from_serialize`], and
//! [`JsonApiDocument`] wraps one or many instances into a top-level
//! `{"data": ...}` document.

pub mod convert;
pub mod definition;
pub mod document;
pub mod error;
pub mod fields;
pub mod instance;
pub mod links;
pub mod render;

pub use convert::snake_to_camel_case;
pub use definition::{IDENTIFIER_FIELD, ResourceDefinition, ResourceDefinitionBuilder};
pub use document::{JsonApiDocument, PrimaryData};
pub use error::{DefinitionError, InstanceError, RenderError};
pub use fields::{FieldDescriptor, FieldKind};
pub use instance::{InstanceBuilder, ResourceInstance};
pub use links::{LinkFactory, LinkRegistry};
pub use render::{AttributeSelector, RenderedDocument};
