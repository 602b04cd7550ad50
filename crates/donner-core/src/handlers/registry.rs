//! Handler registry for looking up execution templates by name.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::{Handler, HandlerType};

/// Global registry of all built-in handlers.
static REGISTRY: LazyLock<HandlerRegistry> = LazyLock::new(HandlerRegistry::new);

/// Read-only table of handlers keyed by `HandlerType`.
///
/// Strategies refer to handlers by name only; lookups hand out copies so a
/// strategy can never alter the table.
struct HandlerRegistry {
    handlers: HashMap<HandlerType, Handler>,
}

impl HandlerRegistry {
    fn new() -> Self {
        let handlers = HandlerType::all()
            .iter()
            .map(|handler_type| (*handler_type, handler_type.handler()))
            .collect();
        Self { handlers }
    }

    fn get_by_type(&self, handler_type: HandlerType) -> Option<Handler> {
        self.handlers.get(&handler_type).copied()
    }

    fn get(&self, name: &str) -> Option<Handler> {
        HandlerType::parse(name).and_then(|t| self.get_by_type(t))
    }
}

/// Look up a handler by its configuration name.
pub fn lookup(name: &str) -> Option<Handler> {
    REGISTRY.get(name)
}

/// Look up a handler by type.
pub fn lookup_by_type(handler_type: HandlerType) -> Option<Handler> {
    REGISTRY.get_by_type(handler_type)
}

/// Check if a handler name is known.
pub fn is_valid_handler(name: &str) -> bool {
    lookup(name).is_some()
}

/// Get all valid handler names, sorted.
pub fn valid_handler_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = HandlerType::all().iter().map(|t| t.as_str()).collect();
    names.sort();
    names
}
