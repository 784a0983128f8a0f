//! Contract executor: runs one invocation as one transaction.
//!
//! `ContractExecutor::execute` implements the invocation lifecycle:
//!
//! 1. Open a `MockHost` over the committed state with a fresh overlay
//! 2. Dispatch the invocation to the record store
//! 3. On success, return the response and the overlay's write set
//! 4. On failure, discard the overlay and return an empty write set
//!
//! **Atomicity:** an invocation either yields all of its writes or none.
//! Committing the write set is the caller's step (`MemStore::apply`, or the
//! platform's ledger commit), so simulation and commit stay separate.

use ledgerkv_hostapi::{HostConfig, MemStore, MockHost, StateStore, TxContext, WriteSet};
use ledgerkv_primitives::{Invocation, Response};
use tracing::{debug, warn};

use crate::dispatch::dispatch;
use crate::store::RecordStore;

/// Result of executing one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    pub response: Response,
    /// Writes to commit. Empty when the invocation failed.
    pub write_set: WriteSet,
}

/// Executes invocations against committed state.
#[derive(Debug, Clone, Default)]
pub struct ContractExecutor {
    records: RecordStore,
    config: HostConfig,
}

impl ContractExecutor {
    pub fn new(config: HostConfig) -> Self {
        Self {
            records: RecordStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Simulate `invocation` against `committed` without modifying it.
    pub fn execute(
        &self,
        invocation: &Invocation,
        committed: &dyn StateStore,
        context: TxContext,
    ) -> ExecutionOutcome {
        let tx_id = context.tx_id.clone();
        let mut host = MockHost::new(committed, context, self.config.clone());

        match dispatch(&self.records, &mut host, invocation) {
            Ok(payload) => {
                let write_set = host.into_write_set();
                debug!(
                    tx_id = %tx_id,
                    function = %invocation.function,
                    writes = write_set.len(),
                    "invocation succeeded"
                );
                ExecutionOutcome {
                    response: Response::success(payload),
                    write_set,
                }
            }
            Err(err) => {
                warn!(
                    tx_id = %tx_id,
                    function = %invocation.function,
                    error = %err,
                    "invocation failed"
                );
                host.rollback();
                ExecutionOutcome {
                    response: Response::failure(&err),
                    write_set: WriteSet::new(),
                }
            }
        }
    }

    /// Execute `invocation` and commit its writes to `store`.
    pub fn submit(
        &self,
        invocation: &Invocation,
        store: &mut MemStore,
        context: TxContext,
    ) -> Response {
        let outcome = self.execute(invocation, &*store, context);
        store.apply(outcome.write_set);
        outcome.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkv_primitives::ErrorCode;

    fn ctx(tx_id: &str, seconds: i64) -> TxContext {
        TxContext::at_seconds(tx_id, "alice", seconds)
    }

    #[test]
    fn test_execute_does_not_touch_committed_state() {
        let store = MemStore::new();
        let executor = ContractExecutor::default();

        let outcome = executor.execute(
            &Invocation::new("StoreMetadata", ["a", "1"]),
            &store,
            ctx("tx1", 1_700_000_000),
        );
        assert!(outcome.response.is_ok());
        assert_eq!(outcome.write_set.len(), 1);
        assert!(outcome.write_set.contains_key(&b"a".to_vec()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_invocation_has_empty_write_set() {
        let store = MemStore::new();
        let executor = ContractExecutor::default();

        let outcome = executor.execute(
            &Invocation::new("UpdateMetadata", ["a", "1"]),
            &store,
            ctx("tx1", 1_700_000_000),
        );
        assert_eq!(outcome.response.code, ErrorCode::NotFound);
        assert!(outcome.write_set.is_empty());
    }

    #[test]
    fn test_submit_commits() {
        let mut store = MemStore::new();
        let executor = ContractExecutor::default();

        let resp = executor.submit(
            &Invocation::new("StoreMetadata", ["a", "1"]),
            &mut store,
            ctx("tx1", 1_700_000_000),
        );
        assert!(resp.is_ok());
        assert_eq!(store.len(), 1);

        let resp = executor.submit(
            &Invocation::new("DeleteMetadata", ["a"]),
            &mut store,
            ctx("tx2", 1_700_000_001),
        );
        assert!(resp.is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn test_config_limits_apply() {
        let mut store = MemStore::new();
        let executor = ContractExecutor::new(HostConfig::default().with_max_value_len(8));
        assert_eq!(executor.config().max_value_len, 8);

        let resp = executor.submit(
            &Invocation::new("StoreMetadata", ["a", "1"]),
            &mut store,
            ctx("tx1", 1_700_000_000),
        );
        assert_eq!(resp.code, ErrorCode::BackendWrite);
        assert!(store.is_empty());
    }
}
