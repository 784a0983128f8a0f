//! Host-side error types.
//!
//! `HostError` is what a [`HostApi`](crate::HostApi) or
//! [`StateStore`](crate::StateStore) returns when a state call fails. The
//! contract does not inspect the variant: read failures become
//! `BackendRead` and write/delete failures become `BackendWrite`.

/// Error returned by host state calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// State keys must be non-empty.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds `max_key_len`.
    #[error("key too large: {len} bytes (max {max})")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds `max_value_len`.
    #[error("value too large: {len} bytes (max {max})")]
    ValueTooLarge { len: usize, max: usize },

    /// The invocation's buffered writes would exceed `max_write_bytes`.
    #[error("write limit exceeded: {projected} bytes (max {max})")]
    WriteLimit { projected: u64, max: u64 },

    /// The storage backend itself failed.
    #[error("backend error: {0}")]
    Backend(String),
}

impl HostError {
    /// Create a backend error from any displayable cause.
    pub fn backend(cause: impl std::fmt::Display) -> Self {
        Self::Backend(cause.to_string())
    }
}
