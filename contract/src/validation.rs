//! Invocation argument validation.
//!
//! Checks run before any host call, so a rejected invocation never reads
//! or writes state.

use ledgerkv_primitives::{ContractError, ContractResult};

use crate::dispatch::Operation;

/// Check that `args` has exactly the arity `operation` expects.
pub fn validate_arguments(operation: Operation, args: &[String]) -> ContractResult<()> {
    let expected = operation.arity();
    if args.len() != expected {
        return Err(ContractError::InvalidArguments {
            function: operation.name().to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}
