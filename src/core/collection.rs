//! Named asset collections.
//!
//! A collection is an ordered list of asset references configured by the
//! application. The registry is a pure lookup table; it performs no I/O.

use std::collections::BTreeMap;

/// Registry of configured collections.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: BTreeMap<String, Vec<String>>,
}

impl CollectionRegistry {
    /// Create a registry from configured collections.
    pub fn new(collections: BTreeMap<String, Vec<String>>) -> Self {
        CollectionRegistry { collections }
    }

    /// Determine if a collection exists.
    pub fn has(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Return an existing collection's references, in load order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// All collections.
    pub fn all(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.collections
            .iter()
            .map(|(name, refs)| (name.as_str(), refs.as_slice()))
    }

    /// Names of all collections.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}
