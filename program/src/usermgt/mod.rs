//! User management contract
//!
//! Used as a contract witness: its `verifySignature` method accepts only the
//! user `"Bob"` and checks a secp256r1 signature over the network magic and
//! the hash of the container being verified.

pub mod instruction;
pub mod processor;
