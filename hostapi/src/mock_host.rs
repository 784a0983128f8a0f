//! In-memory transactional host.
//!
//! `MockHost` implements [`HostApi`] over a committed [`StateStore`] plus a
//! [`StateOverlay`] holding the current invocation's writes:
//!
//! - reads check the overlay first, then fall through to committed state
//! - writes and deletes only touch the overlay
//! - [`MockHost::into_write_set`] hands the buffered writes back for commit
//!
//! Dropping the host without committing discards everything it buffered,
//! which gives each invocation all-or-nothing semantics.

use crate::error::HostError;
use crate::overlay::{OverlayLookup, StateOverlay, WriteSet};
use crate::state_store::StateStore;
use crate::traits::HostApi;
use crate::types::{HostConfig, TxContext};

/// Host for one invocation against borrowed committed state.
pub struct MockHost<'a> {
    committed: &'a dyn StateStore,
    overlay: StateOverlay,
    context: TxContext,
    config: HostConfig,
}

impl<'a> MockHost<'a> {
    pub fn new(committed: &'a dyn StateStore, context: TxContext, config: HostConfig) -> Self {
        Self {
            committed,
            overlay: StateOverlay::new(),
            context,
            config,
        }
    }

    /// Host with default limits.
    pub fn with_defaults(committed: &'a dyn StateStore, context: TxContext) -> Self {
        Self::new(committed, context, HostConfig::default())
    }

    pub fn context(&self) -> &TxContext {
        &self.context
    }

    /// Buffered writes of this invocation.
    pub fn overlay(&self) -> &StateOverlay {
        &self.overlay
    }

    /// Discard everything buffered so far.
    pub fn rollback(&mut self) {
        self.overlay.clear();
    }

    /// Consume the host and return its writes for commit.
    pub fn into_write_set(self) -> WriteSet {
        self.overlay.into_write_set()
    }

    fn check_key(&self, key: &str) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }
}

impl HostApi for MockHost<'_> {
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.check_key(key)?;
        match self.overlay.get(key.as_bytes()) {
            OverlayLookup::Written(value) => Ok(Some(value)),
            OverlayLookup::Deleted => Ok(None),
            OverlayLookup::Untouched => self.committed.get(key.as_bytes()),
        }
    }

    fn state_set(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(HostError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }

        let projected = self.overlay.projected_bytes(key.as_bytes(), value.len());
        if projected > self.config.max_write_bytes {
            tracing::debug!(key, projected, "write budget exhausted");
            return Err(HostError::WriteLimit {
                projected,
                max: self.config.max_write_bytes,
            });
        }

        self.overlay.set(key.as_bytes().to_vec(), value.to_vec());
        Ok(())
    }

    fn state_delete(&mut self, key: &str) -> Result<(), HostError> {
        self.check_key(key)?;
        self.overlay.delete(key.as_bytes().to_vec());
        Ok(())
    }

    fn caller_identity(&self) -> String {
        self.context.caller.clone()
    }

    fn tx_timestamp(&self) -> String {
        self.context.timestamp_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem_store::MemStore;

    fn ctx() -> TxContext {
        TxContext::at_seconds("tx1", "alice", 1_700_000_000)
    }

    #[test]
    fn test_state_roundtrip() {
        let store = MemStore::new();
        let mut host = MockHost::with_defaults(&store, ctx());

        assert_eq!(host.state_get("k").unwrap(), None);
        host.state_set("k", b"v").unwrap();
        assert_eq!(host.state_get("k").unwrap(), Some(b"v".to_vec()));
        host.state_delete("k").unwrap();
        assert_eq!(host.state_get("k").unwrap(), None);
    }

    #[test]
    fn test_reads_fall_through_to_committed() {
        let mut store = MemStore::new();
        store.insert(b"existing".to_vec(), b"old".to_vec());
        let mut host = MockHost::with_defaults(&store, ctx());

        assert_eq!(host.state_get("existing").unwrap(), Some(b"old".to_vec()));
        host.state_set("existing", b"new").unwrap();
        assert_eq!(host.state_get("existing").unwrap(), Some(b"new".to_vec()));
        host.state_delete("existing").unwrap();
        assert_eq!(host.state_get("existing").unwrap(), None);
    }

    #[test]
    fn test_committed_state_untouched_until_applied() {
        let mut store = MemStore::new();
        let writes = {
            let mut host = MockHost::with_defaults(&store, ctx());
            host.state_set("k", b"v").unwrap();
            host.into_write_set()
        };
        assert!(store.is_empty());

        store.apply(writes);
        assert_eq!(store.get(b"k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_rollback_discards_writes() {
        let store = MemStore::new();
        let mut host = MockHost::with_defaults(&store, ctx());
        host.state_set("k", b"v").unwrap();
        host.rollback();
        assert_eq!(host.state_get("k").unwrap(), None);
        assert!(host.into_write_set().is_empty());
    }

    #[test]
    fn test_key_validation() {
        let store = MemStore::new();
        let mut host = MockHost::with_defaults(&store, ctx());
        let big_key = "k".repeat(HostConfig::default().max_key_len + 1);

        assert_eq!(host.state_set("", b"v"), Err(HostError::EmptyKey));
        assert_eq!(host.state_get(""), Err(HostError::EmptyKey));
        assert_eq!(host.state_delete(""), Err(HostError::EmptyKey));
        assert!(matches!(
            host.state_set(&big_key, b"v"),
            Err(HostError::KeyTooLarge { .. })
        ));
    }

    #[test]
    fn test_value_too_large() {
        let store = MemStore::new();
        let config = HostConfig::default().with_max_value_len(4);
        let mut host = MockHost::new(&store, ctx(), config);

        host.state_set("k", b"1234").unwrap();
        assert_eq!(
            host.state_set("k", b"12345"),
            Err(HostError::ValueTooLarge { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_write_limit() {
        let store = MemStore::new();
        let config = HostConfig::default().with_max_write_bytes(10);
        let mut host = MockHost::new(&store, ctx(), config);

        host.state_set("a", b"123456789").unwrap(); // 10 bytes
        assert!(matches!(
            host.state_set("b", b"1"),
            Err(HostError::WriteLimit { .. })
        ));
        // Overwriting the same key releases its previous bytes.
        host.state_set("a", b"12345678").unwrap();
    }

    #[test]
    fn test_context_accessors() {
        let store = MemStore::new();
        let host = MockHost::with_defaults(&store, ctx());
        assert_eq!(host.caller_identity(), "alice");
        assert_eq!(host.tx_timestamp(), ctx().timestamp_string());
        assert_eq!(host.context().tx_id, "tx1");
    }
}
