//! Flat key-value persistence
//!
//! Storage is a string-to-string map with browser localStorage semantics:
//! in-memory mutation never fails, and every value is a string (numbers in
//! decimal form, collections as JSON). Failures only exist at the file
//! boundary of [`JsonFileStore`], where they surface as [`StoreError`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors at the store's file boundary
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is not a flat string map: {0}")]
    Format(#[from] serde_json::Error),
}

/// String-keyed storage with localStorage semantics
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Volatile store for guest identities and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// A flat JSON object on disk: `{"key": "value", ...}`
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a store file. Fails on I/O errors or a non-flat payload.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    /// Read a store file, falling back to an empty store when the file is
    /// missing (first run) - localStorage's behavior for absent keys.
    pub fn load_or_default(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the store back out as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
