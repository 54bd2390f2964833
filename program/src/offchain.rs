//! Off-chain helpers for building `usermgt` witnesses
//!
//! A witness is a pair of scripts. The invocation script pushes the user's
//! signature; the verification script pushes the user name, packs both into
//! an argument array and calls `verifySignature` on the deployed contract.

use {
    crate::{
        interop::{CallFlags, Hash160, Hash256},
        usermgt::instruction::SIGNATURE_LEN,
    },
    p256::ecdsa::{signature::Signer, Signature, SigningKey},
    sha2::{Digest, Sha256},
    solana_program_error::ProgramError,
};

/// Network magic of the local test environment
pub const DEFAULT_NETWORK_MAGIC: u32 = 15405;

/// Script hash of the `usermgt` contract in the test environment, display
/// (big-endian) form `1b4012d2aba18230a8ada77540f64d190480cbb0`.
pub const DEFAULT_USERMGT_HASH: Hash160 = Hash160::from_be_bytes([
    0x1b, 0x40, 0x12, 0xd2, 0xab, 0xa1, 0x82, 0x30, 0xa8, 0xad, 0xa7, 0x75, 0x40, 0xf6, 0x4d, 0x19,
    0x04, 0x80, 0xcb, 0xb0,
]);

/// Name of the syscall used to call another contract
pub const CONTRACT_CALL_SYSCALL: &str = "System.Contract.Call";

mod opcode {
    pub const PUSHDATA1: u8 = 0x0c;
    pub const PUSH0: u8 = 0x10;
    pub const PACK: u8 = 0xc0;
    pub const SYSCALL: u8 = 0x41;
}

/// Payload signed by a `usermgt` user: little-endian network magic followed
/// by the container hash.
pub fn signed_payload(network: u32, container_hash: &Hash256) -> Vec<u8> {
    let mut payload = network.to_le_bytes().to_vec();
    payload.extend_from_slice(container_hash.as_ref());
    payload
}

/// Hash of a marshalled script container
pub fn container_hash(container: &[u8]) -> Hash256 {
    Hash256(Sha256::digest(container).into())
}

/// Signs `payload` with ECDSA over secp256r1 and SHA-256, returning `r || s`.
pub fn sign_payload(signing_key: &SigningKey, payload: &[u8]) -> [u8; SIGNATURE_LEN] {
    let signature: Signature = signing_key.sign(payload);
    let mut bytes = [0u8; SIGNATURE_LEN];
    bytes.copy_from_slice(&signature.to_bytes());
    bytes
}

/// Four byte identifier the host derives from a syscall name
pub fn interop_id(name: &str) -> [u8; 4] {
    let digest = Sha256::digest(name.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Invocation script pushing `signature`
pub fn invocation_script(signature: &[u8; SIGNATURE_LEN]) -> Vec<u8> {
    let mut script = Vec::with_capacity(SIGNATURE_LEN + 2);
    script.push(opcode::PUSHDATA1);
    script.push(SIGNATURE_LEN as u8);
    script.extend_from_slice(signature);
    script
}

/// Verification script calling `method` of `contract` with `user` and the
/// signature left on the stack by the invocation script.
pub fn verification_script(
    user: &str,
    method: &str,
    contract: &Hash160,
) -> Result<Vec<u8>, ProgramError> {
    let mut script = Vec::new();
    push_data(&mut script, user.as_bytes())?;
    script.push(opcode::PUSH0 + 2);
    script.push(opcode::PACK);
    script.push(opcode::PUSH0 + CallFlags::READ_ONLY.0);
    push_data(&mut script, method.as_bytes())?;
    push_data(&mut script, contract.as_ref())?;
    script.push(opcode::SYSCALL);
    script.extend_from_slice(&interop_id(CONTRACT_CALL_SYSCALL));
    Ok(script)
}

fn push_data(script: &mut Vec<u8>, data: &[u8]) -> Result<(), ProgramError> {
    let len = u8::try_from(data.len()).map_err(|_| ProgramError::InvalidArgument)?;
    script.push(opcode::PUSHDATA1);
    script.push(len);
    script.extend_from_slice(data);
    Ok(())
}
