//! Resource link factories
//!
//! A definition can register named link factories at build time; rendering
//! resolves the requested names into the document's `links` object using
//! the instance identifier.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Factory turning an identifier value into a URL.
pub type LinkFactory = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Named link factories attached to a resource definition.
///
/// The registry is populated through the definition builder and read-only
/// afterwards, so definitions stay shareable across threads.
#[derive(Clone, Default)]
pub struct LinkRegistry {
	factories: HashMap<String, LinkFactory>,
	names: Vec<String>,
}

impl LinkRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn register(&mut self, name: impl Into<String>, factory: LinkFactory) {
		let name = name.into();
		if self.factories.insert(name.clone(), factory).is_none() {
			self.names.push(name);
		}
	}

	/// Resolve a registered link name against an identifier value.
	///
	/// Returns `None` when no factory was registered under `name`.
	pub fn resolve(&self, name: &str, id: &Value) -> Option<String> {
		self.factories.get(name).map(|factory| factory(id))
	}

	/// Whether a factory was registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.factories.contains_key(name)
	}

	/// Registered link names, in registration order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}

impl fmt::Debug for LinkRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LinkRegistry")
			.field("names", &self.names)
			.finish()
	}
}
