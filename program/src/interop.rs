//! Host interop surface
//!
//! The contracts never talk to a virtual machine directly. Every capability
//! they need (network id, script container, logging, contract calls and
//! signature checks) is reached through the traits below, so a host embeds
//! the contracts by implementing [`Host`].

use {
    bytemuck::{Pod, Zeroable},
    num_derive::FromPrimitive,
    solana_program_error::ProgramError,
};

/// 20-byte script hash identifying a deployed contract, in the byte order the
/// host stores it (little-endian relative to its display form).
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Hash160(pub [u8; 20]);

impl Hash160 {
    /// Builds a hash from its display (big-endian) form.
    pub const fn from_be_bytes(mut bytes: [u8; 20]) -> Self {
        let mut i = 0;
        while i < 10 {
            let tmp = bytes[i];
            bytes[i] = bytes[19 - i];
            bytes[19 - i] = tmp;
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the display (big-endian) form of the hash.
    pub fn to_be_bytes(&self) -> [u8; 20] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 32-byte hash of a transaction or other script container.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Hash256(pub [u8; 32]);

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Script hash of the native contract management contract,
/// `0xfffdc93764dbaddd97c48f252a53ea4643faa3fd`.
pub const MANAGEMENT_HASH: Hash160 = Hash160::from_be_bytes([
    0xff, 0xfd, 0xc9, 0x37, 0x64, 0xdb, 0xad, 0xdd, 0x97, 0xc4, 0x8f, 0x25, 0x2a, 0x53, 0xea, 0x46,
    0x43, 0xfa, 0xa3, 0xfd,
]);

/// Permissions granted to a called contract.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct CallFlags(pub u8);

impl CallFlags {
    /// No permissions
    pub const NONE: Self = Self(0);
    /// Allows reading contract storage
    pub const READ_STATES: Self = Self(0b0001);
    /// Allows writing contract storage
    pub const WRITE_STATES: Self = Self(0b0010);
    /// Allows calling other contracts
    pub const ALLOW_CALL: Self = Self(0b0100);
    /// Allows emitting notifications
    pub const ALLOW_NOTIFY: Self = Self(0b1000);
    /// Read and write storage
    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);
    /// Read storage and call other contracts
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);
    /// Every permission
    pub const ALL: Self = Self(Self::STATES.0 | Self::ALLOW_CALL.0 | Self::ALLOW_NOTIFY.0);

    /// Returns true if every flag in `other` is also set in `self`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Curve and digest combination understood by the host's ECDSA check.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum NamedCurveHash {
    /// secp256k1 with SHA-256
    Secp256k1Sha256 = 22,
    /// secp256r1 with SHA-256
    Secp256r1Sha256 = 23,
    /// secp256k1 with Keccak-256
    Secp256k1Keccak256 = 122,
    /// secp256r1 with Keccak-256
    Secp256r1Keccak256 = 123,
}

/// Values exchanged with the host across a contract call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StackItem {
    /// Null
    #[default]
    Any,
    /// Boolean
    Boolean(bool),
    /// Integer
    Integer(i64),
    /// Immutable byte string, also used for strings
    ByteString(Vec<u8>),
    /// Ordered collection of items
    Array(Vec<StackItem>),
}

impl StackItem {
    /// Stack item type code of the variant
    pub fn type_code(&self) -> u8 {
        match self {
            StackItem::Any => 0x00,
            StackItem::Boolean(_) => 0x20,
            StackItem::Integer(_) => 0x21,
            StackItem::ByteString(_) => 0x28,
            StackItem::Array(_) => 0x40,
        }
    }

    /// Returns the raw bytes if the item is a byte string
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StackItem::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<&str> for StackItem {
    fn from(value: &str) -> Self {
        StackItem::ByteString(value.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for StackItem {
    fn from(value: Vec<u8>) -> Self {
        StackItem::ByteString(value)
    }
}

impl From<bool> for StackItem {
    fn from(value: bool) -> Self {
        StackItem::Boolean(value)
    }
}

impl From<i64> for StackItem {
    fn from(value: i64) -> Self {
        StackItem::Integer(value)
    }
}

/// Execution environment facts and logging.
pub trait Runtime {
    /// Magic number of the network the host is running on
    fn get_network(&self) -> u32;

    /// Hash of the transaction (or other container) being executed
    fn get_script_container_hash(&self) -> Hash256;

    /// Emits a contract log line
    fn log(&self, message: &str);
}

/// Cryptographic primitives offered by the host.
pub trait Crypto {
    /// Checks `signature` over `message` for `public_key`. The message is
    /// hashed by the host with the digest named by `curve_hash`.
    fn verify_with_ecdsa(
        &self,
        message: &[u8],
        public_key: &[u8],
        signature: &[u8],
        curve_hash: NamedCurveHash,
    ) -> Result<bool, ProgramError>;
}

/// Calls into other deployed contracts.
pub trait ContractCall {
    /// Invokes `method` of the contract at `script_hash`
    fn call(
        &self,
        script_hash: &Hash160,
        method: &str,
        flags: CallFlags,
        args: &[StackItem],
    ) -> Result<StackItem, ProgramError>;
}

/// Everything a contract may ask of its host.
pub trait Host: Runtime + Crypto + ContractCall {}

impl<T: Runtime + Crypto + ContractCall> Host for T {}

/// Encodes an integer the way the host serializes integers to bytes:
/// minimal little-endian two's complement, empty for zero.
pub fn integer_to_bytes(value: i64) -> Vec<u8> {
    if value == 0 {
        return vec![];
    }
    let mut bytes = value.to_le_bytes().to_vec();
    while bytes.len() > 1 {
        let last = bytes[bytes.len() - 1];
        let sign_of_prev = bytes[bytes.len() - 2] & 0x80;
        if (last == 0x00 && sign_of_prev == 0) || (last == 0xff && sign_of_prev != 0) {
            bytes.pop();
        } else {
            break;
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_hash_byte_order() {
        assert_eq!(MANAGEMENT_HASH.0[0], 0xfd);
        assert_eq!(MANAGEMENT_HASH.0[19], 0xff);
        assert_eq!(MANAGEMENT_HASH.to_be_bytes()[0], 0xff);
    }

    #[test]
    fn call_flags_composites() {
        assert_eq!(CallFlags::ALL, CallFlags(15));
        assert_eq!(CallFlags::READ_ONLY, CallFlags(5));
        assert!(CallFlags::ALL.contains(CallFlags::ALLOW_CALL));
        assert!(!CallFlags::READ_ONLY.contains(CallFlags::WRITE_STATES));
    }

    #[test]
    fn integer_encoding_is_minimal() {
        assert_eq!(integer_to_bytes(0), Vec::<u8>::new());
        assert_eq!(integer_to_bytes(1), vec![1]);
        assert_eq!(integer_to_bytes(-1), vec![0xff]);
        assert_eq!(integer_to_bytes(127), vec![0x7f]);
        assert_eq!(integer_to_bytes(128), vec![0x80, 0x00]);
        assert_eq!(integer_to_bytes(-128), vec![0x80]);
        assert_eq!(integer_to_bytes(15405), vec![0x2d, 0x3c]);
        assert_eq!(
            integer_to_bytes(0x8000_0000),
            vec![0x00, 0x00, 0x00, 0x80, 0x00]
        );
    }
}
