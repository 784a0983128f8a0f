//! Error types for the ledgerkv contract.
//!
//! `ContractError` is the error every contract operation returns. Each
//! variant maps to a stable numeric [`ErrorCode`] carried in the
//! [`Response`](crate::Response) handed back to the host.

use std::fmt;

/// Contract error codes reported to the host.
///
/// `0` = OK, non-zero = error. These repr values are part of the response
/// format and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    NotFound = 1,
    BackendRead = 2,
    BackendWrite = 3,
    Serialization = 4,
    Deserialization = 5,
    UnknownFunction = 6,
    InvalidArguments = 7,
}

impl ErrorCode {
    /// Convert from an i32 error code.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::NotFound),
            2 => Some(Self::BackendRead),
            3 => Some(Self::BackendWrite),
            4 => Some(Self::Serialization),
            5 => Some(Self::Deserialization),
            6 => Some(Self::UnknownFunction),
            7 => Some(Self::InvalidArguments),
            _ => None,
        }
    }

    /// Return the i32 representation of this error code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "ERR_NOT_FOUND"),
            Self::BackendRead => write!(f, "ERR_BACKEND_READ"),
            Self::BackendWrite => write!(f, "ERR_BACKEND_WRITE"),
            Self::Serialization => write!(f, "ERR_SERIALIZATION"),
            Self::Deserialization => write!(f, "ERR_DESERIALIZATION"),
            Self::UnknownFunction => write!(f, "ERR_UNKNOWN_FUNCTION"),
            Self::InvalidArguments => write!(f, "ERR_INVALID_ARGUMENTS"),
        }
    }
}

/// Contract error type.
///
/// Errors are surfaced to the caller immediately. The contract never
/// retries or recovers; the host transaction discards any partial writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// No record is stored under the key.
    #[error("the record {0} does not exist")]
    NotFound(String),

    /// The host failed to read world state.
    #[error("failed to read from world state: {0}")]
    BackendRead(String),

    /// The host failed to write or delete world state.
    #[error("failed to write to world state: {0}")]
    BackendWrite(String),

    /// A record could not be encoded.
    #[error("failed to encode record: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded into a record.
    #[error("failed to decode record: {0}")]
    Deserialization(String),

    /// The invoked function name is not part of the contract.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// The invocation carried the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {got}")]
    InvalidArguments {
        function: String,
        expected: usize,
        got: usize,
    },
}

impl ContractError {
    /// The numeric code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::BackendRead(_) => ErrorCode::BackendRead,
            Self::BackendWrite(_) => ErrorCode::BackendWrite,
            Self::Serialization(_) => ErrorCode::Serialization,
            Self::Deserialization(_) => ErrorCode::Deserialization,
            Self::UnknownFunction(_) => ErrorCode::UnknownFunction,
            Self::InvalidArguments { .. } => ErrorCode::InvalidArguments,
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convenience result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
