//! Invocation boundary types: what the host sends in and gets back.
//!
//! The host invokes the contract with a function name and string
//! arguments, and receives a [`Response`] shaped like the platform's shim
//! response: a status, a payload, and a message.

use crate::error::{ContractError, ErrorCode};

/// A single contract invocation as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Function name, e.g. `StoreMetadata` or `storeMetadata`.
    pub function: String,
    /// Positional string arguments.
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a function name and arguments.
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response status codes, matching the platform shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ResponseStatus {
    /// Invocation succeeded.
    Ok = 200,
    /// Invocation failed; `message` explains why.
    Error = 500,
}

impl ResponseStatus {
    /// Returns true if the invocation succeeded.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Numeric status as sent to the host.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: ResponseStatus,
    /// Contract error code; `ErrorCode::Ok` on success.
    pub code: ErrorCode,
    /// Operation output: record JSON for Get, `true`/`false` for Exists,
    /// empty otherwise.
    pub payload: Vec<u8>,
    /// Error text on failure, empty on success.
    pub message: String,
}

impl Response {
    /// A successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            code: ErrorCode::Ok,
            payload,
            message: String::new(),
        }
    }

    /// A failed response describing `err`.
    pub fn failure(err: &ContractError) -> Self {
        Self {
            status: ResponseStatus::Error,
            code: err.code(),
            payload: Vec::new(),
            message: err.to_string(),
        }
    }

    /// Returns true if the invocation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

impl From<Result<Vec<u8>, ContractError>> for Response {
    fn from(result: Result<Vec<u8>, ContractError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::failure(&err),
        }
    }
}
