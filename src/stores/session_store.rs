// ============================================================================
// SESSION STORE - access/refresh tokens in durable storage
// ============================================================================
// Always written in full: both keys are replaced together or not at all.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::models::Session;
use crate::utils::constants::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN};
use crate::utils::storage;

/// Key/value storage the session lives in.
pub trait StorageBackend {
    /// `None` for missing keys and for unreadable storage alike.
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        storage::read_item(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage::write_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage::remove_item(key)
    }
}

/// In-memory storage; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore<B: StorageBackend = LocalStorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> Session {
        Session {
            access_token: self.backend.read(STORAGE_KEY_ACCESS_TOKEN),
            refresh_token: self.backend.read(STORAGE_KEY_REFRESH_TOKEN),
        }
    }

    /// Replaces the stored session. On failure the storage is left without a session.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let result = self
            .put(STORAGE_KEY_ACCESS_TOKEN, session.access_token.as_deref())
            .and_then(|_| self.put(STORAGE_KEY_REFRESH_TOKEN, session.refresh_token.as_deref()));

        if let Err(e) = &result {
            log::error!("❌ Could not persist session, clearing it: {}", e);
            self.clear();
        }
        result
    }

    pub fn clear(&self) {
        for key in [STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN] {
            if let Err(e) = self.backend.remove(key) {
                log::warn!("⚠️ Could not remove {}: {}", key, e);
            }
        }
    }

    fn put(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        match value {
            Some(value) => self.backend.write(key, value),
            None => self.backend.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        (SessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn empty_storage_yields_no_session() {
        let (store, _) = store();
        assert_eq!(store.get(), Session::default());
    }

    #[test]
    fn set_then_get_returns_both_tokens_under_fixed_keys() {
        let (store, backend) = store();
        store
            .set(&Session::new("access-1", Some("refresh-1".to_string())))
            .unwrap();

        assert_eq!(backend.read("token").as_deref(), Some("access-1"));
        assert_eq!(backend.read("refresh").as_deref(), Some("refresh-1"));
        assert_eq!(store.get().access_token(), Some("access-1"));
    }

    #[test]
    fn set_overwrites_a_previous_session_in_full() {
        let (store, _) = store();
        store
            .set(&Session::new("old", Some("old-refresh".to_string())))
            .unwrap();
        store.set(&Session::new("new", None)).unwrap();

        let session = store.get();
        assert_eq!(session.access_token.as_deref(), Some("new"));
        assert_eq!(session.refresh_token, None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let (store, backend) = store();
        store.set(&Session::new("a", Some("r".to_string()))).unwrap();
        store.clear();

        assert!(backend.is_empty());
        assert!(store.get().is_empty());
    }

    /// Accepts the first write, rejects every later one.
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        writes: Cell<usize>,
    }

    impl StorageBackend for FlakyStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            if self.writes.get() > 1 {
                return Err(StorageError::WriteFailed(key.to_string()));
            }
            self.inner.write(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_second_write_leaves_no_partial_session() {
        let store = SessionStore::new(FlakyStorage::default());
        let result = store.set(&Session::new("access", Some("refresh".to_string())));

        assert!(result.is_err());
        assert_eq!(store.get(), Session::default());
    }

    struct UnavailableStorage;

    impl StorageBackend for UnavailableStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn unavailable_storage_behaves_as_no_session() {
        let store = SessionStore::new(UnavailableStorage);
        assert!(store.get().is_empty());
        store.clear();
        assert!(store.set(&Session::new("a", None)).is_err());
    }
}
