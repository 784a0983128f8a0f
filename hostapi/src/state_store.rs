//! Backend state storage abstraction.
//!
//! `StateStore` is the committed world state an invocation reads through.
//! The in-memory host layers a [`StateOverlay`](crate::StateOverlay) over
//! it so reads see the invocation's own writes first.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap
//! - the platform's world-state database in production

use crate::error::HostError;

/// Abstraction over committed state storage.
pub trait StateStore: Send + Sync {
    /// Get the committed value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, HostError>;

    /// Check if a key exists in committed state.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &[u8]) -> Result<bool, HostError> {
        Ok(self.get(key)?.is_some())
    }
}
