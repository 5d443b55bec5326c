//! Key-value store capability.
//!
//! # Responsibility
//! - Define the string-to-string `get`/`set` contract consumed by repositories.
//! - Let callers plug in alternative backends (test doubles, adapters).
//!
//! # Invariants
//! - `get` on a key that was never set returns `None`; absence is not a fault.
//! - `set` overwrites any existing value and cannot fail.
//! - Writes go through `&self`, so a store handle can be shared with a
//!   repository while the owner keeps mutating it.

use std::rc::Rc;

pub mod memory;

/// String-to-string storage capability.
///
/// No ordering, iteration, deletion or transactional guarantees are part of
/// this contract.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::KeyValueStore;
    use std::rc::Rc;

    fn write_through<S: KeyValueStore>(store: S) {
        store.set("k", "v");
    }

    #[test]
    fn borrowed_handle_writes_into_owner() {
        let store = MemoryStore::new();
        write_through(&store);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn rc_handle_shares_underlying_map() {
        let store = Rc::new(MemoryStore::new());
        write_through(Rc::clone(&store));
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn boxed_trait_object_dispatches() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "boxed");
        assert_eq!(store.get("k").as_deref(), Some("boxed"));
        assert_eq!(store.get("missing"), None);
    }
}
