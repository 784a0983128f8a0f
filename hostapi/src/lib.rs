//! `ledgerkv-hostapi`: the host side of the ledgerkv record contract.
//!
//! This crate defines what the platform provides to the contract and an
//! in-memory implementation of it:
//!
//! - `HostApi` trait: state access, caller identity, transaction time
//! - `StateStore` trait: committed world-state abstraction
//! - `MemStore`: in-memory `StateStore`
//! - `StateOverlay`: per-invocation write buffer
//! - `MockHost`: transactional `HostApi` over a `StateStore`
//! - `HostConfig` / `TxContext`: limits and per-transaction context
//! - `HostError`: host-side error type

pub mod error;
pub mod types;
pub mod overlay;
pub mod state_store;
pub mod mem_store;
pub mod traits;
pub mod mock_host;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::{HostConfig, TxContext};
pub use overlay::{OverlayLookup, StateOverlay, WriteSet};
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use traits::HostApi;
pub use mock_host::MockHost;
