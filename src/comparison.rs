//! The property comparison list: at most three unique ids, persisted in
//! `localStorage` under [`COMPARISON_STORAGE_KEY`].
//!
//! The list is never mirrored in memory. Each operation reads the stored
//! value, mutates it and writes it back, so edits made in another tab are
//! seen by the next operation here (last write wins).

use crate::config::{COMPARISON_STORAGE_KEY, MAX_COMPARISON};
use crate::error::{js_message, StoreError};
use crate::notify::Notification;
use crate::PropertyId;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use web_sys::Storage;

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `Err` when the browser refuses access (private mode, disabled
    /// cookies, sandboxed frames).
    pub fn open() -> Result<Self, StoreError> {
        let storage = gloo_utils::window()
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)?;
        Ok(LocalStore { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_message(&e)))
    }
}

/// Process-local store, used when durable storage is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whichever store could be opened.
#[derive(Debug)]
pub enum BrowserStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStore::open() {
            Ok(store) => BrowserStore::Local(store),
            Err(e) => {
                log::warn!("comparison list will not persist: {}", e);
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.read(key),
            BrowserStore::Memory(s) => s.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(s) => s.write(key, value),
            BrowserStore::Memory(s) => s.write(key, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("Property already in comparison list")]
    AlreadyPresent(PropertyId),
    #[error("You can compare maximum {} properties", MAX_COMPARISON)]
    Full,
    #[error("Could not save comparison list: {0}")]
    Store(#[from] StoreError),
}

impl ComparisonError {
    pub fn notification(&self) -> Notification {
        match self {
            ComparisonError::AlreadyPresent(_) | ComparisonError::Full => {
                Notification::warning(self.to_string())
            }
            ComparisonError::Store(_) => Notification::error(self.to_string()),
        }
    }
}

pub const ADDED_MESSAGE: &str = "Property added to comparison";
pub const REMOVED_MESSAGE: &str = "Property removed from comparison";

pub struct ComparisonList<S> {
    store: S,
}

impl<S: KeyValueStore> ComparisonList<S> {
    pub fn new(store: S) -> Self {
        ComparisonList { store }
    }

    /// Stored ids, normalized: unreadable data is an empty list, duplicates
    /// and entries beyond capacity are dropped.
    pub fn ids(&self) -> Vec<PropertyId> {
        let Some(raw) = self.store.read(COMPARISON_STORAGE_KEY) else {
            return Vec::new();
        };
        let stored: Vec<PropertyId> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("discarding unreadable comparison list: {}", e);
                return Vec::new();
            }
        };

        let mut ids: Vec<PropertyId> = Vec::with_capacity(MAX_COMPARISON);
        for id in stored {
            if ids.len() == MAX_COMPARISON {
                break;
            }
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn count(&self) -> usize {
        self.ids().len()
    }

    pub fn contains(&self, id: &PropertyId) -> bool {
        self.ids().contains(id)
    }

    /// Append `id`. Returns the new length.
    pub fn add(&self, id: PropertyId) -> Result<usize, ComparisonError> {
        let mut ids = self.ids();
        if ids.contains(&id) {
            return Err(ComparisonError::AlreadyPresent(id));
        }
        if ids.len() >= MAX_COMPARISON {
            return Err(ComparisonError::Full);
        }
        ids.push(id);
        self.persist(&ids)?;
        Ok(ids.len())
    }

    /// Drop every occurrence of `id`. Returns whether anything was removed;
    /// an absent id leaves storage untouched.
    pub fn remove(&self, id: &PropertyId) -> Result<bool, ComparisonError> {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.persist(&ids)?;
        Ok(true)
    }

    fn persist(&self, ids: &[PropertyId]) -> Result<(), ComparisonError> {
        let encoded = serde_json::to_string(ids)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        self.store.write(COMPARISON_STORAGE_KEY, &encoded)?;
        log::debug!("comparison list now {}", encoded);
        Ok(())
    }
}

/// Badge text, or `None` when the badge should be hidden.
pub fn badge_text(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PropertyId {
        PropertyId::new(s)
    }

    fn list() -> ComparisonList<MemoryStore> {
        ComparisonList::new(MemoryStore::default())
    }

    #[test]
    fn add_persists_and_counts() {
        let list = list();
        assert_eq!(list.add(id("10")), Ok(1));
        assert_eq!(list.add(id("11")), Ok(2));
        assert_eq!(
            list.store.read(COMPARISON_STORAGE_KEY).as_deref(),
            Some(r#"["10","11"]"#)
        );
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn duplicate_add_keeps_single_entry() {
        let list = list();
        list.add(id("7")).unwrap();
        let err = list.add(id("7")).unwrap_err();
        assert_eq!(err, ComparisonError::AlreadyPresent(id("7")));
        assert_eq!(err.to_string(), "Property already in comparison list");
        assert_eq!(list.ids(), vec![id("7")]);
    }

    #[test]
    fn full_list_rejects_and_is_unchanged() {
        let list = list();
        for n in ["1", "2", "3"] {
            list.add(id(n)).unwrap();
        }
        let before = list.store.read(COMPARISON_STORAGE_KEY);
        let err = list.add(id("4")).unwrap_err();
        assert_eq!(err, ComparisonError::Full);
        assert_eq!(err.to_string(), "You can compare maximum 3 properties");
        assert_eq!(err.notification().level, crate::notify::NoticeLevel::Warning);
        assert_eq!(list.store.read(COMPARISON_STORAGE_KEY), before);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let list = list();
        list.add(id("1")).unwrap();
        assert_eq!(list.remove(&id("99")), Ok(false));
        assert_eq!(list.ids(), vec![id("1")]);
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let store = MemoryStore::default();
        store
            .write(COMPARISON_STORAGE_KEY, r#"["4",4,"5"]"#)
            .unwrap();
        let list = ComparisonList::new(store);
        assert_eq!(list.remove(&id("4")), Ok(true));
        assert_eq!(
            list.store.read(COMPARISON_STORAGE_KEY).as_deref(),
            Some(r#"["5"]"#)
        );
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let store = MemoryStore::default();
        store.write(COMPARISON_STORAGE_KEY, "{not json").unwrap();
        let list = ComparisonList::new(store);
        assert!(list.ids().is_empty());
        assert_eq!(list.add(id("1")), Ok(1));
    }

    #[test]
    fn oversized_storage_is_normalized() {
        let store = MemoryStore::default();
        store
            .write(COMPARISON_STORAGE_KEY, r#"["1","1","2","3","4"]"#)
            .unwrap();
        let list = ComparisonList::new(store);
        assert_eq!(list.ids(), vec![id("1"), id("2"), id("3")]);
        assert_eq!(list.add(id("9")), Err(ComparisonError::Full));
    }

    #[test]
    fn external_writes_are_picked_up() {
        let list = list();
        list.add(id("1")).unwrap();
        // Another tab replaced the list.
        list.store
            .write(COMPARISON_STORAGE_KEY, r#"["8","9"]"#)
            .unwrap();
        assert_eq!(list.add(id("1")), Ok(3));
        assert_eq!(list.ids(), vec![id("8"), id("9"), id("1")]);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("QuotaExceededError".into()))
        }
    }

    #[test]
    fn failed_write_surfaces_as_error_notice() {
        let list = ComparisonList::new(ReadOnlyStore);
        let err = list.add(id("1")).unwrap_err();
        assert!(matches!(err, ComparisonError::Store(_)));
        assert_eq!(err.notification().level, crate::notify::NoticeLevel::Error);
    }

    #[test]
    fn badge_hidden_when_empty() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(2).as_deref(), Some("2"));
    }
}
