//! Collection types shared across crates.

use indexmap::IndexMap;
use std::hash::Hash;

pub use rustc_hash::{FxHashMap, FxHashSet};

/// Several values per key; both keys and each key's values keep insertion
/// order, so iteration is deterministic across runs.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    map: IndexMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V> MultiMap<K, V> {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_default().push(value);
    }

    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.map.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<K: Eq + Hash, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_insertion_order() {
        let mut map = MultiMap::new();
        map.insert("foo".to_string(), 3);
        map.insert("bar".to_string(), 1);
        map.insert("foo".to_string(), 2);
        assert_eq!(map.get("foo"), &[3, 2]);
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["foo", "bar"]);
    }

    #[test]
    fn missing_key_is_empty_slice() {
        let map: MultiMap<String, u32> = MultiMap::new();
        assert!(map.get("nope").is_empty());
        assert!(!map.contains_key("nope"));
        assert!(map.is_empty());
    }
}
