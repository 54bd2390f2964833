#![allow(dead_code)]

use {
    std::{io::Write, process::Command},
    tempfile::NamedTempFile,
};

pub const TEST_CONTRACTS_CLI_BIN: &str = env!("CARGO_BIN_EXE_neofs-test-contracts");

pub const TEST_PRIVATE_KEY: &str =
    "1111111111111111111111111111111111111111111111111111111111111111";

pub fn container_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

pub fn run(args: &[&str]) -> String {
    let output = Command::new(TEST_CONTRACTS_CLI_BIN)
        .args(args)
        .env_remove("NEOFS_TEST_NETWORK")
        .env_remove("NEOFS_TEST_CONTRACT")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

pub fn run_json(args: &[&str]) -> serde_json::Value {
    let mut args = args.to_vec();
    args.extend(["--output", "json"]);
    serde_json::from_str(&run(&args)).unwrap()
}
