//! Registry of rendered element handles.
//!
//! One registry belongs to one [`Menu`](crate::Menu) for its whole
//! lifetime. Rendered items register their handles by [`PathId`]; the
//! keyboard router resolves focus targets through it.

use std::collections::HashMap;

use crate::path::PathId;

/// Element handles indexed by path, plus the root nav handle.
#[derive(Debug)]
pub struct NodeRegistry<H> {
    items: HashMap<PathId, H>,
    nav: Option<H>,
}

impl<H> Default for NodeRegistry<H> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            nav: None,
        }
    }
}

impl<H> NodeRegistry<H> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle for an item, returning the one it replaces.
    pub fn register(&mut self, path: PathId, handle: H) -> Option<H> {
        self.items.insert(path, handle)
    }

    /// Look up the handle for an item.
    #[must_use]
    pub fn lookup(&self, path: &PathId) -> Option<&H> {
        self.items.get(path)
    }

    /// Register the root nav element handle.
    pub fn register_nav(&mut self, handle: H) {
        self.nav = Some(handle);
    }

    /// Root nav element handle.
    #[must_use]
    pub fn nav(&self) -> Option<&H> {
        self.nav.as_ref()
    }

    /// Number of registered items (the nav handle is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_replaces_previous_handle() {
        let mut registry = NodeRegistry::new();
        let path: PathId = "0-1".parse().unwrap();

        assert_eq!(registry.register(path.clone(), "first"), None);
        assert_eq!(registry.register(path.clone(), "second"), Some("first"));
        assert_eq!(registry.lookup(&path), Some(&"second"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_nav_is_tracked_separately() {
        let mut registry = NodeRegistry::new();
        registry.register_nav("nav");
        assert_eq!(registry.nav(), Some(&"nav"));
        assert!(registry.is_empty());
    }
}
