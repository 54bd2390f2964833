//! Deploy test contract
//!
//! A trivial contract used to exercise deployment and update paths: its
//! deployment hook rejects the `"shouldFail"` sentinel on fresh deploys,
//! `getThree` is a smoke-test entry point and `update` replaces the contract
//! through the native management contract.

pub mod instruction;
pub mod processor;
