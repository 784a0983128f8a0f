//! Invocation dispatch by function name.
//!
//! The platform calls the contract with a function name and string
//! arguments. Both the exported names (`StoreMetadata`) and the lower-camel
//! form clients send (`storeMetadata`) resolve, as do the short operation
//! names (`Store`).
//!
//! | operation  | names                         | args       | payload        |
//! |------------|-------------------------------|------------|----------------|
//! | Initialize | `InitLedger`, `Initialize`    | none       | empty          |
//! | Store      | `StoreMetadata`, `Store`      | key, value | empty          |
//! | Get        | `GetMetadata`, `Get`          | key        | record JSON    |
//! | Update     | `UpdateMetadata`, `Update`    | key, value | empty          |
//! | Delete     | `DeleteMetadata`, `Delete`    | key        | empty          |
//! | Exists     | `MetadataExists`, `Exists`    | key        | `true`/`false` |

use ledgerkv_hostapi::HostApi;
use ledgerkv_primitives::{
    codec::{encode_bool, encode_record},
    ContractError, ContractResult, Invocation, Response,
};

use crate::store::RecordStore;
use crate::validation::validate_arguments;

/// The contract's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Initialize,
    Store,
    Get,
    Update,
    Delete,
    Exists,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Self::Initialize,
        Self::Store,
        Self::Get,
        Self::Update,
        Self::Delete,
        Self::Exists,
    ];

    /// Exported function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initialize => "InitLedger",
            Self::Store => "StoreMetadata",
            Self::Get => "GetMetadata",
            Self::Update => "UpdateMetadata",
            Self::Delete => "DeleteMetadata",
            Self::Exists => "MetadataExists",
        }
    }

    /// Short operation name.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::Store => "Store",
            Self::Get => "Get",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Exists => "Exists",
        }
    }

    /// Number of string arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Initialize => 0,
            Self::Get | Self::Delete | Self::Exists => 1,
            Self::Store | Self::Update => 2,
        }
    }

    /// Resolve a function name, ignoring the case of its first letter.
    pub fn from_name(function: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| {
            names_match(function, op.name()) || names_match(function, op.short_name())
        })
    }
}

fn names_match(given: &str, name: &str) -> bool {
    let mut given_chars = given.chars();
    let mut name_chars = name.chars();
    match (given_chars.next(), name_chars.next()) {
        (Some(a), Some(b)) => {
            a.eq_ignore_ascii_case(&b) && given_chars.as_str() == name_chars.as_str()
        }
        _ => false,
    }
}

/// Run one invocation and return its payload.
pub fn dispatch(
    records: &RecordStore,
    host: &mut dyn HostApi,
    invocation: &Invocation,
) -> ContractResult<Vec<u8>> {
    let operation = Operation::from_name(&invocation.function)
        .ok_or_else(|| ContractError::UnknownFunction(invocation.function.clone()))?;
    validate_arguments(operation, &invocation.args)?;

    let args = &invocation.args;
    match operation {
        Operation::Initialize => records.initialize(host).map(|()| Vec::new()),
        Operation::Store => records.store(host, &args[0], &args[1]).map(|()| Vec::new()),
        Operation::Get => encode_record(&records.get(host, &args[0])?),
        Operation::Update => records.update(host, &args[0], &args[1]).map(|()| Vec::new()),
        Operation::Delete => records.delete(host, &args[0]).map(|()| Vec::new()),
        Operation::Exists => records.exists(host, &args[0]).map(encode_bool),
    }
}

/// Run one invocation and wrap the outcome in a `Response`.
pub fn invoke(records: &RecordStore, host: &mut dyn HostApi, invocation: &Invocation) -> Response {
    dispatch(records, host, invocation).into()
}
