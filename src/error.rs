//! Error types for definition, instance, and render failures
//!
//! All errors are surfaced synchronously to the caller; nothing is retried
//! or recovered internally, and a failing render never produces a partial
//! document.

use thiserror::Error;

/// Raised while building a resource definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
	#[error("this field name is reserved: '{0}'")]
	ReservedFieldName(String),

	#[error("field '{0}' is declared twice")]
	DuplicateField(String),

	#[error("a concrete resource must declare an 'id' field")]
	MissingIdentifier,
}

/// Raised while constructing a resource instance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstanceError {
	#[error("'{field}' is not a declared field of resource '{resource}'")]
	UnknownField { resource: String, field: String },

	#[error("abstract resource '{0}' cannot be instantiated")]
	AbstractResource(String),

	#[error("resource '{resource}' expects an object, got {kind}")]
	NotAnObject { resource: String, kind: String },

	#[error("failed to serialize model for resource '{resource}': {message}")]
	Serialization { resource: String, message: String },
}

/// Raised while rendering an instance or assembling a document.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The attribute selector names a field the definition does not
	/// declare.
	#[error("unexpected required attribute: '{0}'")]
	UnknownAttribute(String),

	/// A field marked required carries no value on the instance.
	#[error("missing required attribute: '{0}'")]
	MissingAttribute(String),

	/// The instance has no value for its identifier field.
	#[error("this '{0}' resource has no id")]
	MissingIdentifier(String),

	#[error("'{0}' is not a registered link name")]
	UnknownLink(String),

	#[error("failed to encode document: {0}")]
	Serialization(#[from] serde_json::Error),
}
