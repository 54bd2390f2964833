//! User management contract processor

use {
    super::instruction::UserMgtInstruction,
    crate::{
        error::TestContractError,
        interop::{integer_to_bytes, Crypto, Host, NamedCurveHash, Runtime, StackItem},
        InvocationResult,
    },
    solana_msg::msg,
    solana_program_error::ProgramError,
};

/// The only user whose signatures are checked
pub const EXPECTED_USER: &str = "Bob";

/// Compressed secp256r1 public key of [`EXPECTED_USER`]
pub const USER_PUBLIC_KEY: [u8; 33] = [
    3, 82, 213, 129, 152, 145, 189, 105, 89, 174, 158, 60, 235, 97, 172, 163, 108, 102, 177, 14, 80,
    147, 80, 130, 37, 187, 89, 163, 108, 182, 213, 170, 53,
];

/// Width of the network magic prefix in the signed payload
pub const NETWORK_PREFIX_LEN: usize = 4;

/// Builds the payload a user signs: the host's integer encoding of the
/// network magic fitted into four bytes, followed by the container hash.
pub fn signed_payload<H: Runtime>(host: &H) -> Vec<u8> {
    let mut payload = vec![0u8; NETWORK_PREFIX_LEN];
    let network = integer_to_bytes(i64::from(host.get_network()));
    let len = network.len().min(NETWORK_PREFIX_LEN);
    payload[..len].copy_from_slice(&network[..len]);
    payload.extend_from_slice(host.get_script_container_hash().as_ref());
    payload
}

/// Processes [`VerifySignature`](enum.UserMgtInstruction.html) instruction.
pub fn process_verify_signature<H: Runtime + Crypto>(
    host: &H,
    user: &str,
    signature: &[u8],
) -> Result<bool, ProgramError> {
    verify_user_signature(host, user, signature, &USER_PUBLIC_KEY)
}

pub(crate) fn verify_user_signature<H: Runtime + Crypto>(
    host: &H,
    user: &str,
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool, ProgramError> {
    if user != EXPECTED_USER {
        msg!("wrong user {}", user);
        return Err(TestContractError::WrongUser.into());
    }

    let payload = signed_payload(host);
    host.verify_with_ecdsa(
        &payload,
        public_key,
        signature,
        NamedCurveHash::Secp256r1Sha256,
    )
}

/// Instruction processor
pub fn process_instruction<H: Host>(host: &H, input: &[u8]) -> InvocationResult {
    match UserMgtInstruction::unpack(input)? {
        UserMgtInstruction::VerifySignature { user, signature } => {
            msg!("Instruction: VerifySignature");
            let valid = process_verify_signature(host, &user, &signature)?;
            Ok(StackItem::Boolean(valid))
        }
    }
}
