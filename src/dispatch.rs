use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::handlers;
use crate::value::{TResult, TransformError, Value};

/// A transformation for one category. Handlers get the registry passed
/// back in so container transforms can route their contents through the
/// same table.
pub type Handler = fn(&Value, &Registry) -> TResult<Value>;

/// The dispatch table: category tag -> handler, plus a fallback for tags
/// nothing was registered under.
#[derive(Clone)]
pub struct Registry {
    handlers: HashMap<String, Handler>,
    default: Handler,
}

impl Registry {
    /// A registry with no handlers at all; every category falls through
    /// to the default.
    pub fn empty() -> Self {
        Registry {
            handlers: HashMap::new(),
            default: unsupported,
        }
    }

    /// A registry with the five built-in categories registered.
    pub fn with_defaults() -> Self {
        let mut registry = Registry::empty();
        handlers::register_defaults(&mut registry);
        registry
    }

    /// Register (or replace) the handler for a category. Registration
    /// never touches the routing itself, so new categories can be added
    /// from outside the crate.
    pub fn set(&mut self, category: &str, handler: Handler) {
        self.handlers
            .insert(category.to_string(), handler);
    }

    /// Replace the fallback invoked when no category matches.
    pub fn set_default(&mut self, handler: Handler) {
        self.default = handler;
    }

    pub fn has(&self, category: &str) -> bool {
        self.handlers.contains_key(category)
    }

    pub fn lookup(&self, category: &str) -> Option<Handler> {
        self.handlers.get(category).copied()
    }

    /// Route a value to the handler registered for its category, or to
    /// the default handler if there is none.
    pub fn apply(&self, value: &Value) -> TResult<Value> {
        match self.lookup(value.category()) {
            Some(handler) => handler(value, self),
            None => (self.default)(value, self),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::with_defaults()
    }
}

/// The shipped fallback: always fails, naming the category nothing was
/// registered for.
fn unsupported(value: &Value, _registry: &Registry) -> TResult<Value> {
    Err(TransformError::UnsupportedCategory(
        value.category().to_string(),
    ))
}

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::with_defaults();
}

/// Transform a value with the built-in handlers. Consumers with their
/// own categories build a registry and call `Registry::apply` instead.
pub fn transform(value: &Value) -> TResult<Value> {
    DEFAULT_REGISTRY.apply(value)
}
