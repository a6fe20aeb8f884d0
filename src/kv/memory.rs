//! In-memory [`KeyValueStore`] for tests and hosts with their own persistence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

use super::KeyValueStore;

/// A `BTreeMap` behind a mutex. Enumeration is in key order, so it is
/// deterministic for any given contents.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().expect("kv entries mutex poisoned")
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn scan(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .entries()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}
