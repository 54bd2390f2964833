use {
    crate::helpers::{
        invoke_builder::{Check, InvokeBuilder},
        mock_host::{MockHost, TEST_CONTAINER, TEST_NETWORK},
    },
    neofs_test_contracts::{
        error::TestContractError,
        interop::{NamedCurveHash, StackItem},
        offchain::signed_payload,
        usermgt::{
            instruction::{verify_signature, SIGNATURE_LEN},
            processor::USER_PUBLIC_KEY,
        },
        TestContract,
    },
    solana_program_error::ProgramError,
};

pub mod helpers;

const SIGNATURE: [u8; SIGNATURE_LEN] = [0x33; SIGNATURE_LEN];

#[test]
fn test_valid_signature_for_bob() {
    let result = InvokeBuilder::new(TestContract::UserMgt)
        .input(verify_signature("Bob", &SIGNATURE).unwrap())
        .check(Check::returns(StackItem::Boolean(true)))
        .execute();

    let verifications = result.host.verifications.borrow();
    assert_eq!(verifications.len(), 1);
    let verification = &verifications[0];
    assert_eq!(
        verification.message,
        signed_payload(TEST_NETWORK, &TEST_CONTAINER)
    );
    assert_eq!(verification.public_key, USER_PUBLIC_KEY.to_vec());
    assert_eq!(verification.signature, SIGNATURE.to_vec());
    assert_eq!(verification.curve_hash, NamedCurveHash::Secp256r1Sha256);
}

#[test]
fn test_invalid_signature_for_bob() {
    let host = MockHost {
        verify_result: Ok(false),
        ..MockHost::default()
    };
    InvokeBuilder::new(TestContract::UserMgt)
        .host(host)
        .input(verify_signature("Bob", &SIGNATURE).unwrap())
        .check(Check::returns(StackItem::Boolean(false)))
        .execute();
}

#[test]
fn test_other_user_aborts() {
    for user in ["Alice", "bob", "BOB", "Bob\0", ""] {
        let result = InvokeBuilder::new(TestContract::UserMgt)
            .input(verify_signature(user, &SIGNATURE).unwrap())
            .check(Check::err(TestContractError::WrongUser.into()))
            .execute();
        assert!(result.host.verifications.borrow().is_empty());
    }
}

#[test]
fn test_payload_follows_network() {
    let host = MockHost {
        network: 860_833_102,
        ..MockHost::default()
    };
    let result = InvokeBuilder::new(TestContract::UserMgt)
        .host(host)
        .input(verify_signature("Bob", &SIGNATURE).unwrap())
        .execute();

    let verifications = result.host.verifications.borrow();
    assert_eq!(&verifications[0].message[..4], &860_833_102u32.to_le_bytes());
    assert_eq!(&verifications[0].message[4..], TEST_CONTAINER.as_ref());
}

#[test]
fn test_host_crypto_failure_propagates() {
    let host = MockHost {
        verify_result: Err(ProgramError::InvalidArgument),
        ..MockHost::default()
    };
    InvokeBuilder::new(TestContract::UserMgt)
        .host(host)
        .input(verify_signature("Bob", &SIGNATURE).unwrap())
        .check(Check::err(ProgramError::InvalidArgument))
        .execute();
}

#[test]
fn test_short_signature_for_bob_is_invalid() {
    let host = MockHost {
        verify_result: Ok(false),
        ..MockHost::default()
    };
    let result = InvokeBuilder::new(TestContract::UserMgt)
        .host(host)
        .input(verify_signature("Bob", &[0; 63]).unwrap())
        .check(Check::returns(StackItem::Boolean(false)))
        .execute();

    let verifications = result.host.verifications.borrow();
    assert_eq!(verifications.len(), 1);
    assert_eq!(verifications[0].signature, vec![0; 63]);
}
