//! Insertion-ordered directive maps for structured header values.
//!
//! Serialization order of a structured header is the order its directives were
//! inserted (or appeared in a deserialized document). Re-inserting an existing name
//! replaces the value in place and keeps the original position.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directives<V> {
    entries: IndexMap<String, V>,
}

impl<V> Directives<V> {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Inserts a directive, returning the value it replaced.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Chained form of [`Directives::insert`].
    #[must_use]
    pub fn with<S: Into<String>>(mut self, name: S, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Removes a directive; the remaining ones keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for Directives<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for Directives<V> {
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}
