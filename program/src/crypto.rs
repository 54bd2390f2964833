//! ECDSA verification backed by RustCrypto

use {
    crate::{
        error::TestContractError,
        interop::{Crypto, NamedCurveHash},
    },
    p256::ecdsa::{signature::Verifier, Signature, VerifyingKey},
    solana_program_error::ProgramError,
};

/// [`Crypto`] implementation for secp256r1 with SHA-256, the combination the
/// user management contract asks for. Other curve and hash pairs are
/// rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256r1Crypto;

impl Crypto for Secp256r1Crypto {
    fn verify_with_ecdsa(
        &self,
        message: &[u8],
        public_key: &[u8],
        signature: &[u8],
        curve_hash: NamedCurveHash,
    ) -> Result<bool, ProgramError> {
        if curve_hash != NamedCurveHash::Secp256r1Sha256 {
            return Err(TestContractError::UnsupportedCurveHash.into());
        }
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|_| TestContractError::InvalidPublicKey)?;
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}
