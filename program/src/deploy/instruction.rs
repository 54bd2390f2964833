//! Deploy test contract instructions

use {
    crate::{
        codec::{pack_invocation, unpack_invocation},
        error::TestContractError,
        interop::StackItem,
    },
    solana_program_error::ProgramError,
};

/// Instructions supported by the deploy test contract
#[derive(Clone, Debug, PartialEq)]
pub enum DeployInstruction {
    /// Deployment hook, called by the host once when the contract is
    /// deployed and once on every update.
    ///
    /// Arguments: `data: Any`, `isUpdate: Boolean`
    Deploy {
        /// Opaque deployment data supplied by the deployer
        data: StackItem,
        /// True if the hook runs as part of an update
        is_update: bool,
    },

    /// Returns the integer 3.
    GetThree,

    /// Replaces the contract code through the native management contract.
    ///
    /// Arguments: `nef: ByteString`, `manifest: ByteString`, `data: Any`
    Update {
        /// Serialized NEF of the new contract version
        nef: Vec<u8>,
        /// Serialized manifest of the new contract version
        manifest: Vec<u8>,
        /// Opaque data handed to the new version's deployment hook
        data: StackItem,
    },
}

impl DeployInstruction {
    /// Exported method name
    pub fn method(&self) -> &'static str {
        match self {
            DeployInstruction::Deploy { .. } => "_deploy",
            DeployInstruction::GetThree => "getThree",
            DeployInstruction::Update { .. } => "update",
        }
    }

    /// Packs a [`DeployInstruction`](enum.DeployInstruction.html) into a
    /// byte array. Fails with `InvalidArgument` if an argument does not fit
    /// the wire format.
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        let args = match self {
            DeployInstruction::Deploy { data, is_update } => {
                vec![data.clone(), StackItem::Boolean(*is_update)]
            }
            DeployInstruction::GetThree => vec![],
            DeployInstruction::Update {
                nef,
                manifest,
                data,
            } => vec![
                StackItem::ByteString(nef.clone()),
                StackItem::ByteString(manifest.clone()),
                data.clone(),
            ],
        };
        pack_invocation(self.method(), &args)
    }

    /// Unpacks a byte array into a
    /// [`DeployInstruction`](enum.DeployInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (method, args) = unpack_invocation(input)?;
        let mut args = args.into_iter();
        let instruction = match (method, args.len()) {
            ("_deploy", 2) => {
                let data = args.next().unwrap_or_default();
                let StackItem::Boolean(is_update) = args.next().unwrap_or_default() else {
                    return Err(ProgramError::InvalidInstructionData);
                };
                DeployInstruction::Deploy { data, is_update }
            }
            ("getThree", 0) => DeployInstruction::GetThree,
            ("update", 3) => {
                let (StackItem::ByteString(nef), StackItem::ByteString(manifest)) = (
                    args.next().unwrap_or_default(),
                    args.next().unwrap_or_default(),
                ) else {
                    return Err(ProgramError::InvalidInstructionData);
                };
                let data = args.next().unwrap_or_default();
                DeployInstruction::Update {
                    nef,
                    manifest,
                    data,
                }
            }
            ("_deploy", _) | ("getThree", _) | ("update", _) => {
                return Err(ProgramError::InvalidInstructionData)
            }
            _ => return Err(TestContractError::UnknownMethod.into()),
        };
        Ok(instruction)
    }
}

/// Creates a `_deploy` invocation.
pub fn deploy(data: StackItem, is_update: bool) -> Result<Vec<u8>, ProgramError> {
    DeployInstruction::Deploy { data, is_update }.pack()
}

/// Creates a `getThree` invocation.
pub fn get_three() -> Result<Vec<u8>, ProgramError> {
    DeployInstruction::GetThree.pack()
}

/// Creates an `update` invocation.
pub fn update(
    nef: &[u8],
    manifest: &[u8],
    data: StackItem,
) -> Result<Vec<u8>, ProgramError> {
    DeployInstruction::Update {
        nef: nef.to_vec(),
        manifest: manifest.to_vec(),
        data,
    }
    .pack()
}
