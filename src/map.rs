//! Ordered map type for summarized objects.
//!
//! This module provides [`SummaryMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object keys. Key order is observable in the
//! rendered summary (keys are emitted in the order they were inserted, never
//! sorted), so the backing map has to preserve it.
//!
//! ## Why IndexMap?
//!
//! `SummaryMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: the same tree always renders the same summary
//! - **Faithful ordering**: keys appear in the summary as they appear in the
//!   source data
//! - **Predictable tests**: assertions on rendered output don't depend on
//!   hash ordering
//!
//! ## Examples
//!
//! ```rust
//! use serde_summary::{SummaryMap, Value};
//!
//! let mut map = SummaryMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to summary values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which the renderer relies on when emitting object keys.
///
/// # Examples
///
/// ```rust
/// use serde_summary::{SummaryMap, Value};
///
/// let mut map = SummaryMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMap(IndexMap<String, crate::Value>);

impl SummaryMap {
    /// Creates an empty `SummaryMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryMap;
    ///
    /// let map = SummaryMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        SummaryMap(IndexMap::new())
    }

    /// Creates an empty `SummaryMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SummaryMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::{SummaryMap, Value};
    ///
    /// let mut map = SummaryMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::{SummaryMap, Value};
    ///
    /// let mut map = SummaryMap::new();
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_summary::SummaryMap;
    ///
    /// let map = SummaryMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Default for SummaryMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for SummaryMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        SummaryMap(map.into_iter().collect())
    }
}

impl From<SummaryMap> for HashMap<String, crate::Value> {
    fn from(map: SummaryMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for SummaryMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for SummaryMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        SummaryMap(IndexMap::from_iter(iter))
    }
}
