//! Ordered map type for TOON objects.
//!
//! [`ToonMap`] wraps an [`IndexMap`] so object keys keep their insertion
//! order. Order is part of a TOON document's meaning: the encoder writes keys
//! in the order they were inserted and the decoder inserts them in the order
//! they appear in the text, so `decode(encode(v))` reproduces it.
//!
//! Re-inserting an existing key replaces the value but keeps the key's
//! original position. The decoder relies on this when it swaps a nested
//! object placeholder for the array that was declared beneath it.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{ToonMap, ToonValue};
//!
//! let mut map = ToonMap::new();
//! map.insert("name".to_string(), ToonValue::from("Alice"));
//! map.insert("age".to_string(), ToonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::ToonValue;
use indexmap::IndexMap;

/// An ordered map of string keys to TOON values.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{ToonMap, ToonValue};
///
/// let mut map = ToonMap::new();
/// map.insert("first".to_string(), ToonValue::from(1));
/// map.insert("second".to_string(), ToonValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToonMap(IndexMap<String, ToonValue>);

impl ToonMap {
    /// Creates an empty `ToonMap`.
    #[must_use]
    pub fn new() -> Self {
        ToonMap(IndexMap::new())
    }

    /// Creates an empty `ToonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ToonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::{ToonMap, ToonValue};
    ///
    /// let mut map = ToonMap::new();
    /// map.insert("a".to_string(), ToonValue::Null);
    /// map.insert("b".to_string(), ToonValue::Null);
    /// assert!(map.insert("a".to_string(), ToonValue::from(1)).is_some());
    ///
    /// let keys: Vec<_> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: String, value: ToonValue) -> Option<ToonValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ToonValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ToonValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down to keep the remaining order.
    pub fn remove(&mut self, key: &str) -> Option<ToonValue> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ToonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ToonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ToonValue> {
        self.0.iter()
    }

    /// Returns `true` if both maps hold the same keys, ignoring order.
    #[must_use]
    pub fn same_keys(&self, other: &ToonMap) -> bool {
        self.len() == other.len() && self.keys().all(|k| other.contains_key(k))
    }
}

impl IntoIterator for ToonMap {
    type Item = (String, ToonValue);
    type IntoIter = indexmap::map::IntoIter<String, ToonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ToonMap {
    type Item = (&'a String, &'a ToonValue);
    type IntoIter = indexmap::map::Iter<'a, String, ToonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ToonValue)> for ToonMap {
    fn from_iter<T: IntoIterator<Item = (String, ToonValue)>>(iter: T) -> Self {
        ToonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_keeps_order() {
        let mut map: ToonMap = ["a", "b", "c"]
            .iter()
            .map(|k| (k.to_string(), ToonValue::Null))
            .collect();
        map.remove("b");
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_same_keys_ignores_order() {
        let left: ToonMap = [("x", 1), ("y", 2)]
            .iter()
            .map(|(k, v)| (k.to_string(), ToonValue::from(*v)))
            .collect();
        let right: ToonMap = [("y", 3), ("x", 4)]
            .iter()
            .map(|(k, v)| (k.to_string(), ToonValue::from(*v)))
            .collect();
        assert!(left.same_keys(&right));

        let mut wider = right.clone();
        wider.insert("z".to_string(), ToonValue::Null);
        assert!(!left.same_keys(&wider));
    }
}
