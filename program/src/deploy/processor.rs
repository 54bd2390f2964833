//! Deploy test contract processor

use {
    super::instruction::DeployInstruction,
    crate::{
        error::TestContractError,
        interop::{CallFlags, ContractCall, Host, Runtime, StackItem, MANAGEMENT_HASH},
        InvocationResult,
    },
    solana_msg::msg,
    solana_program_error::ProgramResult,
};

/// Deployment data that makes a fresh deployment fail
pub const SHOULD_FAIL: &[u8] = b"shouldFail";

/// Log line emitted after a successful self-update
pub const UPDATED_LOG: &str = "test contract was updated";

/// Processes [`Deploy`](enum.DeployInstruction.html) instruction.
///
/// The sentinel check only applies to fresh deployments; data that is not a
/// byte string never matches it.
pub fn process_deploy(data: &StackItem, is_update: bool) -> ProgramResult {
    if !is_update && data.as_bytes() == Some(SHOULD_FAIL) {
        return Err(TestContractError::DeployFailed.into());
    }
    Ok(())
}

/// Processes [`GetThree`](enum.DeployInstruction.html) instruction.
pub fn process_get_three() -> i64 {
    3
}

/// Processes [`Update`](enum.DeployInstruction.html) instruction.
pub fn process_update<H: ContractCall + Runtime>(
    host: &H,
    nef: Vec<u8>,
    manifest: Vec<u8>,
    data: StackItem,
) -> ProgramResult {
    host.call(
        &MANAGEMENT_HASH,
        "update",
        CallFlags::ALL,
        &[
            StackItem::ByteString(nef),
            StackItem::ByteString(manifest),
            data,
        ],
    )?;
    host.log(UPDATED_LOG);
    Ok(())
}

/// Instruction processor
pub fn process_instruction<H: Host>(host: &H, input: &[u8]) -> InvocationResult {
    match DeployInstruction::unpack(input)? {
        DeployInstruction::Deploy { data, is_update } => {
            msg!("Instruction: Deploy");
            process_deploy(&data, is_update)?;
            Ok(StackItem::Any)
        }
        DeployInstruction::GetThree => {
            msg!("Instruction: GetThree");
            Ok(StackItem::Integer(process_get_three()))
        }
        DeployInstruction::Update {
            nef,
            manifest,
            data,
        } => {
            msg!("Instruction: Update");
            process_update(host, nef, manifest, data)?;
            Ok(StackItem::Any)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deploy_with_sentinel_fails() {
        assert_eq!(
            process_deploy(&StackItem::from("shouldFail"), false),
            Err(TestContractError::DeployFailed.into())
        );
    }

    #[test]
    fn sentinel_is_ignored_on_update() {
        assert_eq!(process_deploy(&StackItem::from("shouldFail"), true), Ok(()));
    }

    #[test]
    fn other_data_deploys() {
        for data in [
            StackItem::from("ok"),
            StackItem::from("shouldfail"),
            StackItem::from("shouldFail "),
            StackItem::Any,
            StackItem::Integer(3),
            StackItem::Array(vec![StackItem::from("shouldFail")]),
        ] {
            assert_eq!(process_deploy(&data, false), Ok(()), "{:?}", data);
        }
    }

    #[test]
    fn get_three_is_constant() {
        for _ in 0..3 {
            assert_eq!(process_get_three(), 3);
        }
    }
}
