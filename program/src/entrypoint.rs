//! Contract entrypoints

use {
    crate::{error::log_error, interop::Host, InvocationResult, TestContract},
    solana_msg::msg,
};

/// Runs a packed invocation of `contract` against `host`. Errors are logged
/// before they abort the invocation.
pub fn process_invocation<H: Host>(
    contract: TestContract,
    host: &H,
    input: &[u8],
) -> InvocationResult {
    msg!("Contract: {}", contract.name());
    let result = match contract {
        TestContract::Deploy => crate::deploy::processor::process_instruction(host, input),
        TestContract::UserMgt => crate::usermgt::processor::process_instruction(host, input),
    };
    result.inspect_err(log_error)
}
