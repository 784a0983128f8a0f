//! `ledgerkv-primitives`: foundational types for the ledgerkv record contract.
//!
//! This crate provides the types shared by the host API and the contract:
//!
//! - [`Record`]: the stored entity and its JSON wire form
//! - [`codec`]: record encoding/decoding
//! - [`ContractError`] / [`ErrorCode`]: the contract error taxonomy
//! - [`Invocation`] / [`Response`]: the invocation boundary with the host
//! - [`crypto`]: caller identity derivation from Ed25519 keys

pub mod types;
pub mod error;
pub mod codec;
pub mod execution;
pub mod crypto;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Record, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::{ContractError, ContractResult, ErrorCode};
pub use execution::{Invocation, Response, ResponseStatus};
