//! Per-transaction write buffer over committed state.
//!
//! A `StateOverlay` collects the writes and deletes of one invocation.
//! Reads made later in the same invocation see them; committed state is
//! untouched until the host applies the resulting [`WriteSet`]. Dropping
//! the overlay discards the invocation's effects.

use std::collections::BTreeMap;

/// Buffered writes keyed by state key: `Some(bytes)` for a put, `None`
/// for a delete. Sorted by key.
pub type WriteSet = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// Result of looking up a key in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayLookup {
    /// The key was written in this overlay.
    Written(Vec<u8>),
    /// The key was deleted in this overlay.
    Deleted,
    /// The overlay has no entry; the caller falls through to committed state.
    Untouched,
}

/// Write buffer for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: WriteSet,
    /// Key and value bytes currently buffered, for `max_write_bytes`.
    total_write_bytes: u64,
}

/// Bytes an overlay entry counts against the write budget.
fn entry_bytes(key: &[u8], value: Option<&Vec<u8>>) -> u64 {
    key.len() as u64 + value.map_or(0, |v| v.len() as u64)
}

impl StateOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a put, replacing any earlier put or delete of the same key.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.release(&key);
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add(entry_bytes(&key, Some(&value)));
        self.writes.insert(key, Some(value));
    }

    /// Buffer a delete. The key still counts against the write budget.
    pub fn delete(&mut self, key: Vec<u8>) {
        self.release(&key);
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add(entry_bytes(&key, None));
        self.writes.insert(key, None);
    }

    fn release(&mut self, key: &[u8]) {
        if let Some(prev) = self.writes.get(key) {
            self.total_write_bytes = self
                .total_write_bytes
                .saturating_sub(entry_bytes(key, prev.as_ref()));
        }
    }

    /// Look up a key.
    pub fn get(&self, key: &[u8]) -> OverlayLookup {
        match self.writes.get(key) {
            Some(Some(value)) => OverlayLookup::Written(value.clone()),
            Some(None) => OverlayLookup::Deleted,
            None => OverlayLookup::Untouched,
        }
    }

    /// Bytes the projected put of `key`/`value` would leave buffered.
    pub fn projected_bytes(&self, key: &[u8], value_len: usize) -> u64 {
        let prev = self
            .writes
            .get(key)
            .map_or(0, |prev| entry_bytes(key, prev.as_ref()));
        self.total_write_bytes - prev + key.len() as u64 + value_len as u64
    }

    /// Consume the overlay and return its writes.
    pub fn into_write_set(self) -> WriteSet {
        self.writes
    }

    /// Borrow the buffered writes.
    pub fn writes(&self) -> &WriteSet {
        &self.writes
    }

    /// Drop all buffered writes.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.total_write_bytes = 0;
    }

    /// Number of keys touched.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }
}
