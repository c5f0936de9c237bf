//! Registry trait and default implementation for managing tools.

use crate::invoker::{InvokerDefinition, InvokerError, InvokerHandler, InvokerResult, InvokerSource};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A registry of tool definitions.
///
/// This trait covers the declarative side of the registry and is
/// object-safe. Execution is provided by [`DefaultInvokerRegistry::invoke`].
pub trait InvokerRegistry {
	/// Register a definition with no local handler.
	///
	/// Returns an error if an invoker with the same name already exists.
	fn register_definition(&mut self, definition: InvokerDefinition) -> InvokerResult<()>;

	/// Get an invoker definition by name.
	fn get(&self, name: &str) -> Option<&InvokerDefinition>;

	/// List all registered invokers, ordered by name.
	fn list(&self) -> Vec<&InvokerDefinition>;

	/// List invokers from a specific source.
	fn list_by_source(&self, source: InvokerSource) -> Vec<&InvokerDefinition>;

	/// Check if an invoker exists.
	fn contains(&self, name: &str) -> bool;

	/// Remove an invoker, returning its definition if it existed.
	fn remove(&mut self, name: &str) -> Option<InvokerDefinition>;

	/// Get the number of registered invokers.
	fn len(&self) -> usize;

	/// Check if the registry is empty.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Get all invoker names.
	fn names(&self) -> Vec<&str>;
}

#[derive(Clone)]
struct Entry {
	definition: InvokerDefinition,
	handler: Option<Arc<dyn InvokerHandler>>,
}

/// Default registry keyed by tool name.
///
/// Handlers are shared behind `Arc`, so cloning the registry is cheap and
/// clones can be handed to concurrent callers. Nothing is mutated during
/// invocation.
///
/// # Example
///
/// ```
/// use wtk::invoker::{DefaultInvokerRegistry, InvokerRegistry};
/// use wtk::tools::SayGoodbyeTool;
///
/// let mut registry = DefaultInvokerRegistry::new();
/// registry.register(SayGoodbyeTool).unwrap();
///
/// assert!(registry.contains("say_goodbye"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct DefaultInvokerRegistry {
	invokers: BTreeMap<String, Entry>,
}

impl fmt::Debug for DefaultInvokerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DefaultInvokerRegistry")
			.field("invokers", &self.invokers.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl DefaultInvokerRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an executable tool.
	pub fn register<H>(&mut self, handler: H) -> InvokerResult<()>
	where
		H: InvokerHandler + 'static,
	{
		self.register_arc(Arc::new(handler))
	}

	/// Register an executable tool that is already shared.
	pub fn register_arc(&mut self, handler: Arc<dyn InvokerHandler>) -> InvokerResult<()> {
		let definition = handler.definition();
		if self.invokers.contains_key(&definition.name) {
			return Err(InvokerError::duplicate_name(&definition.name));
		}
		self.invokers.insert(
			definition.name.clone(),
			Entry {
				definition,
				handler: Some(handler),
			},
		);
		Ok(())
	}

	/// Get the handler for a tool, if it runs in this process.
	pub fn handler(&self, name: &str) -> Option<Arc<dyn InvokerHandler>> {
		self.invokers.get(name).and_then(|e| e.handler.clone())
	}

	/// Invoke a tool by name.
	///
	/// Unknown names yield `NotFound`; agent delegates yield
	/// `SourceUnavailable` because the runtime performs the delegation.
	pub async fn invoke(&self, name: &str, args: Value) -> InvokerResult<Value> {
		let entry = self
			.invokers
			.get(name)
			.ok_or_else(|| InvokerError::not_found(name))?;

		match &entry.handler {
			Some(handler) => handler.invoke(args).await,
			None => Err(InvokerError::source_unavailable(name, entry.definition.source)),
		}
	}

	/// Clear all invokers from the registry.
	pub fn clear(&mut self) {
		self.invokers.clear();
	}
}

impl InvokerRegistry for DefaultInvokerRegistry {
	fn register_definition(&mut self, definition: InvokerDefinition) -> InvokerResult<()> {
		if self.invokers.contains_key(&definition.name) {
			return Err(InvokerError::duplicate_name(&definition.name));
		}
		self.invokers.insert(
			definition.name.clone(),
			Entry {
				definition,
				handler: None,
			},
		);
		Ok(())
	}

	fn get(&self, name: &str) -> Option<&InvokerDefinition> {
		self.invokers.get(name).map(|e| &e.definition)
	}

	fn list(&self) -> Vec<&InvokerDefinition> {
		self.invokers.values().map(|e| &e.definition).collect()
	}

	fn list_by_source(&self, source: InvokerSource) -> Vec<&InvokerDefinition> {
		self.invokers
			.values()
			.map(|e| &e.definition)
			.filter(|def| def.source == source)
			.collect()
	}

	fn contains(&self, name: &str) -> bool {
		self.invokers.contains_key(name)
	}

	fn remove(&mut self, name: &str) -> Option<InvokerDefinition> {
		self.invokers.remove(name).map(|e| e.definition)
	}

	fn len(&self) -> usize {
		self.invokers.len()
	}

	fn names(&self) -> Vec<&str> {
		self.invokers.keys().map(|s| s.as_str()).collect()
	}
}
