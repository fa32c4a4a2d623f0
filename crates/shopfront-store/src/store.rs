//! File-backed key-value store with automatic serialization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Type-safe key-value store backed by a directory of JSON files.
///
/// One key maps to one file; values are JSON-serialized for any type that
/// implements `Serialize` and `DeserializeOwned`. Writes replace the prior
/// value via a temp file and rename, so a key never holds a half-written
/// value.
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at the given directory, creating it if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::open("./data")?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<LineItem>> = store.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Set a value in the store, overwriting any prior value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        let bytes = serde_json::to_vec(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Delete a value from the store. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.key_path(key)?.exists())
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.contains("..")
            || key.starts_with('.')
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("cart", user_id);
/// // Returns "cart:user123"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        name: String,
        count: u32,
    }

    fn temp_store() -> Store {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "shopfront-store-test-{}-{}",
            std::process::id(),
            n
        ));
        Store::open(dir).unwrap()
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = temp_store();
        let value: Option<Snapshot> = store.get("absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = temp_store();
        let snapshot = Snapshot {
            name: "cart".to_string(),
            count: 3,
        };

        store.set("snapshot", &snapshot).unwrap();
        let loaded: Option<Snapshot> = store.get("snapshot").unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn set_overwrites_prior_value() {
        let store = temp_store();
        store.set("counter", &1u32).unwrap();
        store.set("counter", &2u32).unwrap();

        let loaded: Option<u32> = store.get("counter").unwrap();
        assert_eq!(loaded, Some(2));
    }

    #[test]
    fn delete_removes_key() {
        let store = temp_store();
        store.set("gone", &true).unwrap();
        store.delete("gone").unwrap();

        assert!(!store.exists("gone").unwrap());
        let value: Option<bool> = store.get("gone").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn delete_absent_key_is_noop() {
        let store = temp_store();
        store.delete("never-set").unwrap();
    }

    #[test]
    fn keys_lists_stored_keys() {
        let store = temp_store();
        store.set("b", &1u32).unwrap();
        store.set("a", &2u32).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let store = temp_store();
        std::fs::write(store.root().join("broken.json"), b"not json at all").unwrap();

        let result: Result<Option<Snapshot>, _> = store.get("broken");
        assert!(matches!(result, Err(StoreError::SerializeError(_))));
    }

    #[test]
    fn empty_file_is_an_error() {
        let store = temp_store();
        std::fs::write(store.root().join("empty.json"), b"").unwrap();

        let result: Result<Option<Snapshot>, _> = store.get("empty");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_path_traversal_keys() {
        let store = temp_store();
        assert!(matches!(
            store.set("../escape", &1u32),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get::<u32>("a/b"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.exists(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn store_key_macro_joins_parts() {
        let key = store_key!("cart", "user123");
        assert_eq!(key, "cart:user123");

        let key = store_key!("page", 2, "of", 5);
        assert_eq!(key, "page:2:of:5");
    }
}
