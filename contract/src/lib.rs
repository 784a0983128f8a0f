//! `ledgerkv-contract`: key-value record contract.
//!
//! Stores a string value under a key together with the submitting caller's
//! identity and the transaction time, and supports get, update, delete and
//! existence checks. Consensus, ordering and world-state indexing are the
//! platform's job; this crate is the mapping layer on top.
//!
//! ## Architecture
//!
//! - [`store::RecordStore`]: the operations, over an explicit `HostApi`
//! - [`dispatch`]: function-name routing and `Response` construction
//! - [`validation`]: argument checks before any state access
//! - [`executor::ContractExecutor`]: one invocation as one transaction

pub mod store;
pub mod validation;
pub mod dispatch;
pub mod executor;

// Re-export key types for convenience
pub use store::RecordStore;
pub use dispatch::{dispatch, invoke, Operation};
pub use executor::{ContractExecutor, ExecutionOutcome};
