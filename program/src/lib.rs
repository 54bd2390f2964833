//! NeoFS test contracts
//!
//! Two fixture contracts driven by the NeoFS integration tests: a deploy
//! test contract exercising deployment and update paths, and a user
//! management contract used as a signature-checking witness. Contracts reach
//! the host only through the traits in [`interop`].
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod crypto;
pub mod deploy;
pub mod entrypoint;
pub mod error;
pub mod interop;
pub mod offchain;
pub mod usermgt;

use {crate::interop::StackItem, solana_program_error::ProgramError};

/// Result of a contract method: the value left for the caller, or the error
/// that aborted the invocation.
pub type InvocationResult = Result<StackItem, ProgramError>;

/// Contracts shipped by this crate
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TestContract {
    /// Deploy test contract
    Deploy,
    /// User management contract
    UserMgt,
}

impl TestContract {
    /// Contract name as it appears in the manifest
    pub fn name(&self) -> &'static str {
        match self {
            TestContract::Deploy => "testctr",
            TestContract::UserMgt => "usermgt",
        }
    }

    /// Methods the contract exports
    pub fn methods(&self) -> &'static [&'static str] {
        match self {
            TestContract::Deploy => &["_deploy", "getThree", "update"],
            TestContract::UserMgt => &["verifySignature"],
        }
    }
}
