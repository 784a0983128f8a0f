//! In-memory world state.
//!
//! `MemStore` implements `StateStore` over a `BTreeMap` and can commit a
//! [`WriteSet`] produced by an invocation. It stands in for the platform's
//! state database in tests and local runs.

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::overlay::WriteSet;
use crate::state_store::StateStore;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Insert a key-value pair directly, bypassing any transaction.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a key directly, bypassing any transaction.
    pub fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }

    /// Commit a write set: puts overwrite, `None` entries delete.
    pub fn apply(&mut self, writes: WriteSet) {
        tracing::trace!(entries = writes.len(), "applying write set");
        for (key, value) in writes {
            match value {
                Some(v) => {
                    self.data.insert(key, v);
                }
                None => {
                    self.data.remove(&key);
                }
            }
        }
    }

    /// Iterate committed entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &[u8]) -> Result<bool, HostError> {
        Ok(self.data.contains_key(key))
    }
}
