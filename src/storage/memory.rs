// ============================================================================
// MEMORY STORAGE - in-process map for tests and headless runs
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{StorageBackend, StorageError};

/// In-memory [`StorageBackend`]. Clones share the same underlying map,
/// so a test can hand one handle to a store and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k"), Some("v".to_string()));
    }

    #[test]
    fn get_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("absent"), None);
    }

    #[test]
    fn remove_clears_key_and_tolerates_absence() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k"), None);
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn clones_share_the_same_map() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set_item("shared", "yes").unwrap();
        assert_eq!(b.get_item("shared"), Some("yes".to_string()));
        assert_eq!(b.len(), 1);
    }
}
