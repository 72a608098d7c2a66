//! Content-addressed translation cache.
//!
//! Keyed by a SHA-256 of the source text: the same source always maps to
//! the same entry, duplicates collapse naturally, and a hit never
//! triggers a translation call. No TTL, no eviction, no invalidation -
//! entries are small strings, and this is an explicit non-goal rather
//! than an oversight. Writes are idempotent, so concurrent callers
//! racing to `put` the same key are harmless.

use log::error;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Minimal persistent key-value seam. Any store (file, embedded KV,
/// in-memory map for tests) satisfies it; failures are the
/// implementation's to log and absorb.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Write-through JSON file store. IO failures are logged and absorbed -
/// a broken cache degrades to re-translation, never to an error.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                error!("Discarding unreadable cache file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string(entries) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    error!("Failed to persist cache file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => error!("Failed to serialize cache: {}", e),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
            self.persist(&entries);
        }
    }
}

/// Content-addressed cache of translated strings over any [`KeyValueStore`].
pub struct TranslationCache {
    store: Arc<dyn KeyValueStore>,
}

impl TranslationCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `tr_` + hex SHA-256 of the source text, so cache entries stay
    /// recognizable inside a shared key-value namespace.
    fn cache_key(source_text: &str) -> String {
        format!("tr_{}", hex::encode(Sha256::digest(source_text.as_bytes())))
    }

    pub fn get(&self, source_text: &str) -> Option<String> {
        self.store.get(&Self::cache_key(source_text))
    }

    pub fn put(&self, source_text: &str, translated_text: &str) {
        self.store.put(&Self::cache_key(source_text), translated_text);
    }
}
