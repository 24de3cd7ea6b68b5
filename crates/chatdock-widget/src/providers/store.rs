//! Named credential slots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

pub trait CredentialStore: Send + Sync {
    fn get(&self, slot: &str) -> Option<String>;
}

/// In-process slots, settable by the host.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, slot: impl Into<String>, value: impl Into<String>) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot.into(), value.into());
    }

    pub fn remove(&self, slot: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(slot)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, slot: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(slot)
            .cloned()
    }
}

/// Slots read from a JSON object file (`{"f1-token": "..."}`).
///
/// The file is re-read on every lookup so a sign-in elsewhere is picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/chatdock/credentials.json`, if the platform has a data dir.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::data_dir()?;
        Some(Self::new(dir.join("chatdock").join("credentials.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn get(&self, slot: &str) -> Option<String> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        let json: serde_json::Value = match serde_json::from_str(&data) {
            Ok(json) => json,
            Err(e) => {
                warn!("ignoring unreadable credentials file {}: {e}", self.path.display());
                return None;
            }
        };
        json.get(slot)?.as_str().map(String::from)
    }
}

/// Slots read from environment variables: `f1-token` → `CHATDOCK_F1_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct EnvStore;

impl EnvStore {
    pub fn var_name(slot: &str) -> String {
        let suffix: String = slot
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("CHATDOCK_{suffix}")
    }
}

impl CredentialStore for EnvStore {
    fn get(&self, slot: &str) -> Option<String> {
        std::env::var(Self::var_name(slot)).ok()
    }
}

/// Tries each store in order; first hit wins.
#[derive(Default)]
pub struct LayeredStore {
    stores: Vec<Arc<dyn CredentialStore>>,
}

impl LayeredStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.stores.push(store);
        self
    }

    /// Environment first, then the default credentials file.
    pub fn standard() -> Self {
        let layered = Self::new().with(Arc::new(EnvStore));
        match FileStore::default_location() {
            Some(file) => layered.with(Arc::new(file)),
            None => layered,
        }
    }
}

impl CredentialStore for LayeredStore {
    fn get(&self, slot: &str) -> Option<String> {
        self.stores.iter().find_map(|s| s.get(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("f1-token"), None);
        store.set("f1-token", "abc");
        assert_eq!(store.get("f1-token").as_deref(), Some("abc"));
        assert_eq!(store.remove("f1-token").as_deref(), Some("abc"));
        assert_eq!(store.get("f1-token"), None);
    }

    #[test]
    fn file_store_reads_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, r#"{"f1-token": "from-file", "other": 3}"#).unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("f1-token").as_deref(), Some("from-file"));
        assert_eq!(store.get("other"), None);
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn file_store_tolerates_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        assert_eq!(FileStore::new(&path).get("f1-token"), None);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(FileStore::new(&path).get("f1-token"), None);
    }

    #[test]
    fn env_var_name_from_slot() {
        assert_eq!(EnvStore::var_name("f1-token"), "CHATDOCK_F1_TOKEN");
        assert_eq!(EnvStore::var_name("api.key"), "CHATDOCK_API_KEY");
    }

    #[test]
    fn layered_store_first_hit_wins() {
        let first = Arc::new(MemoryStore::new());
        let second = Arc::new(MemoryStore::new());
        second.set("f1-token", "second");
        second.set("other", "only-second");
        first.set("f1-token", "first");

        let layered = LayeredStore::new().with(first).with(second);
        assert_eq!(layered.get("f1-token").as_deref(), Some("first"));
        assert_eq!(layered.get("other").as_deref(), Some("only-second"));
        assert_eq!(layered.get("missing"), None);
    }
}
