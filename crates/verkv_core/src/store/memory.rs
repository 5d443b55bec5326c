//! In-memory store backed by a hash map.
//!
//! Single-owner and single-threaded: the map sits behind a `RefCell`, which
//! keeps the type `!Sync`. Contents live only as long as the value does.

use crate::store::KeyValueStore;
use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;

/// Reference `KeyValueStore` holding entries in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `key`, returning the value it held.
    ///
    /// Not part of the `KeyValueStore` contract; owners use it to drop a key
    /// behind a repository's back.
    pub fn remove(&self, key: &str) -> Option<String> {
        let removed = self.entries.borrow_mut().remove(key);
        trace!(
            "event=store_remove module=store status=ok present={}",
            removed.is_some()
        );
        removed
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.entries.borrow().get(key).cloned();
        trace!(
            "event=store_get module=store status=ok hit={}",
            value.is_some()
        );
        value
    }

    fn set(&self, key: &str, value: &str) {
        let replaced = self
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        trace!(
            "event=store_set module=store status=ok replaced={}",
            replaced.is_some()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::store::KeyValueStore;

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn remove_returns_previous_value_once() {
        let store = MemoryStore::new();
        store.set("a", "1");

        assert_eq!(store.remove("a").as_deref(), Some("1"));
        assert_eq!(store.remove("a"), None);
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn empty_key_and_value_are_stored_verbatim() {
        let store = MemoryStore::new();
        store.set("", "");
        assert_eq!(store.get("").as_deref(), Some(""));
        assert_eq!(store.len(), 1);
    }
}
