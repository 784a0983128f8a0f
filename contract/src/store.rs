//! Record store: the contract's operations over a host.
//!
//! Every operation takes the host explicitly. The store keeps no state of
//! its own and performs no caching, batching or locking.
//!
//! **Atomicity:** Update and Delete check existence and then mutate as two
//! separate host calls. Whether that pair is atomic against concurrent
//! writers is decided by the host's transaction, not by this module; hosts
//! must run each top-level operation in one all-or-nothing transaction.

use ledgerkv_hostapi::HostApi;
use ledgerkv_primitives::{
    codec::{decode_record, encode_record},
    ContractError, ContractResult, Record,
};
use tracing::debug;

/// Key-value record operations.
///
/// Stateless: all state is accessed through the `HostApi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore;

impl RecordStore {
    pub fn new() -> Self {
        Self
    }

    /// Reserved for seeding the ledger. Currently writes nothing.
    pub fn initialize(&self, _host: &mut dyn HostApi) -> ContractResult<()> {
        debug!("initialize");
        Ok(())
    }

    /// Write a record under `key`, silently replacing any existing one.
    ///
    /// Owner and timestamp come from the host's transaction context.
    pub fn store(&self, host: &mut dyn HostApi, key: &str, value: &str) -> ContractResult<()> {
        debug!(key, "store");
        write_record(host, key, value)
    }

    /// Read the record stored under `key`.
    ///
    /// Absent and empty values both report `NotFound`.
    pub fn get(&self, host: &dyn HostApi, key: &str) -> ContractResult<Record> {
        debug!(key, "get");
        let bytes = host
            .state_get(key)
            .map_err(|e| ContractError::BackendRead(e.to_string()))?;
        match bytes {
            Some(bytes) if !bytes.is_empty() => decode_record(&bytes),
            _ => Err(ContractError::NotFound(key.to_string())),
        }
    }

    /// Overwrite an existing record's value, owner and timestamp.
    ///
    /// Fails with `NotFound` and writes nothing if `key` is absent.
    pub fn update(&self, host: &mut dyn HostApi, key: &str, value: &str) -> ContractResult<()> {
        debug!(key, "update");
        if !self.exists(host, key)? {
            return Err(ContractError::NotFound(key.to_string()));
        }
        write_record(host, key, value)
    }

    /// Remove the record stored under `key`.
    ///
    /// Fails with `NotFound` if `key` is absent.
    pub fn delete(&self, host: &mut dyn HostApi, key: &str) -> ContractResult<()> {
        debug!(key, "delete");
        if !self.exists(host, key)? {
            return Err(ContractError::NotFound(key.to_string()));
        }
        host.state_delete(key)
            .map_err(|e| ContractError::BackendWrite(e.to_string()))
    }

    /// Whether a non-empty value is stored under `key`.
    pub fn exists(&self, host: &dyn HostApi, key: &str) -> ContractResult<bool> {
        let bytes = host
            .state_get(key)
            .map_err(|e| ContractError::BackendRead(e.to_string()))?;
        Ok(bytes.is_some_and(|b| !b.is_empty()))
    }
}

/// Build a record from the host context and write it under `key`.
fn write_record(host: &mut dyn HostApi, key: &str, value: &str) -> ContractResult<()> {
    let record = Record::new(key, value, host.caller_identity(), host.tx_timestamp());
    let bytes = encode_record(&record)?;
    host.state_set(key, &bytes)
        .map_err(|e| ContractError::BackendWrite(e.to_string()))
}
