//! Error types

use {
    num_derive::FromPrimitive,
    num_traits::FromPrimitive as _,
    solana_decode_error::DecodeError,
    solana_msg::msg,
    solana_program_error::{PrintProgramError, ProgramError},
    std::error::Error,
    thiserror::Error,
};

/// Errors that may be returned by the test contracts.
#[derive(Clone, Debug, Eq, Error, PartialEq, FromPrimitive)]
pub enum TestContractError {
    // 0
    /// Fresh deployment was requested with the forbidden sentinel data
    #[error("deploy has failed")]
    DeployFailed,
    /// Signature verification was requested for an unknown user
    #[error("wrong user")]
    WrongUser,
    /// Invocation named a method the contract does not export
    #[error("Method is not exported by the contract")]
    UnknownMethod,
    /// Public key is not a valid compressed or uncompressed curve point
    #[error("Public key is not a valid curve point")]
    InvalidPublicKey,
    /// Curve and digest combination is not supported by the host
    #[error("Unsupported curve and hash combination")]
    UnsupportedCurveHash,
}

impl From<TestContractError> for ProgramError {
    fn from(e: TestContractError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for TestContractError {
    fn type_of() -> &'static str {
        "TestContractError"
    }
}

impl PrintProgramError for TestContractError {
    fn print<E>(&self)
    where
        E: 'static + Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}

/// Logs an error that is about to abort the invocation.
pub fn log_error(err: &ProgramError) {
    match err {
        ProgramError::Custom(code) => match TestContractError::from_u32(*code) {
            Some(e) => e.print::<TestContractError>(),
            None => msg!("Error: unknown custom error {}", code),
        },
        err => msg!("Error: {}", err),
    }
}
