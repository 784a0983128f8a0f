//! Shared test helpers for integration tests.
//!
//! Provides deterministic caller identities, transaction contexts with
//! increasing timestamps, and a small ledger harness that executes and
//! commits invocations against an in-memory world state.

#![allow(dead_code)]

use ed25519_dalek::{SigningKey, VerifyingKey};
use ledgerkv_contract::ContractExecutor;
use ledgerkv_hostapi::{HostConfig, MemStore, TxContext};
use ledgerkv_primitives::{crypto::identity_from_public_key, Invocation, Response};

/// First transaction timestamp used by the harness.
pub const GENESIS_SECONDS: i64 = 1_700_000_000;

/// Install a tracing subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

// ── Deterministic Identities ──

/// Ed25519 verifying key from a single seed byte.
pub fn deterministic_key(seed: u8) -> VerifyingKey {
    SigningKey::from_bytes(&[seed; 32]).verifying_key()
}

/// Alice: seed=1.
pub fn alice() -> String {
    identity_from_public_key(&deterministic_key(1))
}

/// Bob: seed=2.
pub fn bob() -> String {
    identity_from_public_key(&deterministic_key(2))
}

// ── Ledger Harness ──

/// World state plus an executor; every submit is one committed transaction.
pub struct Ledger {
    pub state: MemStore,
    pub executor: ContractExecutor,
    seq: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    pub fn with_config(config: HostConfig) -> Self {
        init_tracing();
        Self {
            state: MemStore::new(),
            executor: ContractExecutor::new(config),
            seq: 0,
        }
    }

    /// Context for the next transaction; each one is a second later.
    pub fn next_context(&mut self, caller: &str) -> TxContext {
        self.seq += 1;
        TxContext::at_seconds(format!("tx-{}", self.seq), caller, GENESIS_SECONDS + self.seq)
    }

    /// Execute and commit.
    pub fn submit(&mut self, caller: &str, function: &str, args: &[&str]) -> Response {
        let context = self.next_context(caller);
        let invocation = Invocation::new(function, args.iter().copied());
        self.executor.submit(&invocation, &mut self.state, context)
    }

    /// Execute without committing.
    pub fn evaluate(&mut self, caller: &str, function: &str, args: &[&str]) -> Response {
        let context = self.next_context(caller);
        let invocation = Invocation::new(function, args.iter().copied());
        self.executor.execute(&invocation, &self.state, context).response
    }
}
