#![cfg(test)]

use super::EscrowTest;
use common::escrow::types::{Escrow, EscrowError as Error, EscrowState};

#[test]
fn test_initialize() {
    let test: EscrowTest = EscrowTest::setup();

    let escrow: Escrow = test.escrow_client.get_escrow();
    assert_eq!(escrow.buyer, test.buyer);
    assert_eq!(escrow.seller, test.seller);
    assert_eq!(escrow.token, test.token_client.address);
    assert_eq!(escrow.amount_deposited, 0);
    assert_eq!(escrow.deposit_timestamp, 0);
    assert_eq!(escrow.state, EscrowState::Created);

    assert_eq!(test.escrow_client.state(), EscrowState::Created);
    assert_eq!(test.escrow_client.balance(), 0);
    assert_eq!(test.escrow_client.version(), 1);
}

#[test]
fn test_double_initialize_fails() {
    let test: EscrowTest = EscrowTest::setup();

    let res = test
        .escrow_client
        .try_initialize(&test.buyer, &test.seller, &test.token_client.address);
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_uninitialized_access_fails() {
    let test: EscrowTest = EscrowTest::setup_no_init();

    assert_eq!(
        test.escrow_client.try_get_escrow(),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        test.escrow_client.try_deposit(&test.buyer, &1_0000000_i128),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        test.escrow_client.try_release_funds(&test.buyer),
        Err(Ok(Error::NotInitialized))
    );
}
