use {
    neofs_test_contracts::interop::{
        CallFlags, ContractCall, Crypto, Hash160, Hash256, NamedCurveHash, Runtime, StackItem,
    },
    solana_program_error::ProgramError,
    std::cell::RefCell,
};

pub const TEST_NETWORK: u32 = 15405;
pub const TEST_CONTAINER: Hash256 = Hash256([0x5a; 32]);

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub script_hash: Hash160,
    pub method: String,
    pub flags: CallFlags,
    pub args: Vec<StackItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedVerification {
    pub message: Vec<u8>,
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub curve_hash: NamedCurveHash,
}

/// Host that records every capability request and answers with canned
/// results.
#[derive(Debug)]
pub struct MockHost {
    pub network: u32,
    pub container: Hash256,
    pub call_result: Result<StackItem, ProgramError>,
    pub verify_result: Result<bool, ProgramError>,
    pub logs: RefCell<Vec<String>>,
    pub calls: RefCell<Vec<RecordedCall>>,
    pub verifications: RefCell<Vec<RecordedVerification>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            network: TEST_NETWORK,
            container: TEST_CONTAINER,
            call_result: Ok(StackItem::Any),
            verify_result: Ok(true),
            logs: RefCell::new(vec![]),
            calls: RefCell::new(vec![]),
            verifications: RefCell::new(vec![]),
        }
    }
}

impl Runtime for MockHost {
    fn get_network(&self) -> u32 {
        self.network
    }

    fn get_script_container_hash(&self) -> Hash256 {
        self.container
    }

    fn log(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_string());
    }
}

impl Crypto for MockHost {
    fn verify_with_ecdsa(
        &self,
        message: &[u8],
        public_key: &[u8],
        signature: &[u8],
        curve_hash: NamedCurveHash,
    ) -> Result<bool, ProgramError> {
        self.verifications.borrow_mut().push(RecordedVerification {
            message: message.to_vec(),
            public_key: public_key.to_vec(),
            signature: signature.to_vec(),
            curve_hash,
        });
        self.verify_result.clone()
    }
}

impl ContractCall for MockHost {
    fn call(
        &self,
        script_hash: &Hash160,
        method: &str,
        flags: CallFlags,
        args: &[StackItem],
    ) -> Result<StackItem, ProgramError> {
        self.calls.borrow_mut().push(RecordedCall {
            script_hash: *script_hash,
            method: method.to_string(),
            flags,
            args: args.to_vec(),
        });
        self.call_result.clone()
    }
}
