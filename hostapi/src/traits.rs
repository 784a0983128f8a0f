//! Host API trait: what the platform provides to the contract.
//!
//! The contract never reaches for ambient state: every operation receives
//! a `HostApi` explicitly, so tests can hand it an in-memory host.

use crate::error::HostError;

/// Host-side services available to one contract invocation.
///
/// A host instance is scoped to a single transaction. The platform is
/// responsible for isolating concurrent transactions and for making all
/// calls made through one instance commit or roll back together.
pub trait HostApi {
    // ── State Access ──

    /// Read a value from world state.
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write a value to world state, replacing any existing value.
    fn state_set(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;

    /// Delete a key from world state.
    fn state_delete(&mut self, key: &str) -> Result<(), HostError>;

    // ── Context ──

    /// Identity of the client that submitted the transaction.
    fn caller_identity(&self) -> String;

    /// Transaction timestamp, already formatted for storage.
    fn tx_timestamp(&self) -> String;
}
