//! User management contract instructions

use {
    crate::{
        codec::{pack_invocation, unpack_invocation},
        error::TestContractError,
        interop::StackItem,
    },
    solana_program_error::ProgramError,
};

/// Length of an `r || s` ECDSA signature
pub const SIGNATURE_LEN: usize = 64;

/// Instructions supported by the user management contract
#[derive(Clone, Debug, PartialEq)]
pub enum UserMgtInstruction {
    /// Checks the witness signature of the current script container.
    ///
    /// Arguments: `user: ByteString`, `sig: ByteString`
    VerifySignature {
        /// Claimed user name
        user: String,
        /// `r || s` signature over the network magic and container hash.
        /// Passed to the host as is, so a signature of the wrong length
        /// verifies as false rather than aborting.
        signature: Vec<u8>,
    },
}

impl UserMgtInstruction {
    /// Exported method name
    pub fn method(&self) -> &'static str {
        match self {
            UserMgtInstruction::VerifySignature { .. } => "verifySignature",
        }
    }

    /// Packs a [`UserMgtInstruction`](enum.UserMgtInstruction.html) into a
    /// byte array.
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        match self {
            UserMgtInstruction::VerifySignature { user, signature } => pack_invocation(
                self.method(),
                &[
                    StackItem::from(user.as_str()),
                    StackItem::ByteString(signature.clone()),
                ],
            ),
        }
    }

    /// Unpacks a byte array into a
    /// [`UserMgtInstruction`](enum.UserMgtInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (method, args) = unpack_invocation(input)?;
        match (method, args.as_slice()) {
            ("verifySignature", [StackItem::ByteString(user), StackItem::ByteString(sig)]) => {
                let user = String::from_utf8(user.clone())
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(UserMgtInstruction::VerifySignature {
                    user,
                    signature: sig.clone(),
                })
            }
            ("verifySignature", _) => Err(ProgramError::InvalidInstructionData),
            _ => Err(TestContractError::UnknownMethod.into()),
        }
    }
}

/// Creates a `verifySignature` invocation.
pub fn verify_signature(user: &str, signature: &[u8]) -> Result<Vec<u8>, ProgramError> {
    UserMgtInstruction::VerifySignature {
        user: user.to_string(),
        signature: signature.to_vec(),
    }
    .pack()
}
