use {
    crate::helpers::mock_host::MockHost,
    neofs_test_contracts::{
        entrypoint::process_invocation, interop::StackItem, InvocationResult, TestContract,
    },
    solana_program_error::ProgramError,
};

pub enum Check {
    Success,
    Return(StackItem),
    Err(ProgramError),
    Logs(Vec<&'static str>),
}

impl Check {
    pub fn success() -> Self {
        Check::Success
    }

    pub fn returns(item: StackItem) -> Self {
        Check::Return(item)
    }

    pub fn err(err: ProgramError) -> Self {
        Check::Err(err)
    }

    pub fn logs(logs: Vec<&'static str>) -> Self {
        Check::Logs(logs)
    }
}

pub struct InvokeResult {
    pub host: MockHost,
    pub result: InvocationResult,
}

pub struct InvokeBuilder {
    contract: TestContract,
    host: MockHost,
    input: Vec<u8>,
    checks: Vec<Check>,
}

impl InvokeBuilder {
    pub fn new(contract: TestContract) -> Self {
        Self {
            contract,
            host: MockHost::default(),
            input: vec![],
            checks: vec![],
        }
    }

    pub fn host(mut self, host: MockHost) -> Self {
        self.host = host;
        self
    }

    pub fn input(mut self, input: Vec<u8>) -> Self {
        self.input = input;
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    pub fn execute(self) -> InvokeResult {
        let result = process_invocation(self.contract, &self.host, &self.input);

        let checks = if self.checks.is_empty() {
            vec![Check::success()]
        } else {
            self.checks
        };
        for check in checks {
            match check {
                Check::Success => assert!(result.is_ok(), "unexpected error: {:?}", result),
                Check::Return(item) => assert_eq!(result, Ok(item)),
                Check::Err(err) => assert_eq!(result, Err(err)),
                Check::Logs(logs) => assert_eq!(*self.host.logs.borrow(), logs),
            }
        }

        InvokeResult {
            host: self.host,
            result,
        }
    }
}
