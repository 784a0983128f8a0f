//! Host-side configuration and transaction context.
//!
//! `HostConfig` bundles the resource limits an in-memory host enforces for
//! one invocation. `TxContext` carries the caller identity and transaction
//! time the platform attaches to every invocation.

use ledgerkv_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};
use prost_types::Timestamp;

/// Resource limits for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum key + value bytes one invocation may buffer.
    pub max_write_bytes: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: 4 * 1024 * 1024, // 4 MiB
        }
    }
}

impl HostConfig {
    /// Override the value size limit, keeping the other defaults.
    pub fn with_max_value_len(mut self, max_value_len: usize) -> Self {
        self.max_value_len = max_value_len;
        self
    }

    /// Override the per-invocation write budget.
    pub fn with_max_write_bytes(mut self, max_write_bytes: u64) -> Self {
        self.max_write_bytes = max_write_bytes;
        self
    }
}

/// Per-transaction context supplied by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct TxContext {
    /// Transaction identifier.
    pub tx_id: String,
    /// Identity of the submitting client.
    pub caller: String,
    /// Transaction timestamp set by the submitting client.
    pub timestamp: Timestamp,
}

impl TxContext {
    pub fn new(tx_id: impl Into<String>, caller: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            tx_id: tx_id.into(),
            caller: caller.into(),
            timestamp,
        }
    }

    /// Context with a whole-second timestamp.
    pub fn at_seconds(tx_id: impl Into<String>, caller: impl Into<String>, seconds: i64) -> Self {
        Self::new(tx_id, caller, Timestamp { seconds, nanos: 0 })
    }

    /// The timestamp rendered as RFC 3339, the form stored in records.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_string()
    }
}
