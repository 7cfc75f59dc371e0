use soroban_sdk::{contracterror, contracttype, Address};

/// Seconds after a deposit before the buyer may reclaim funds without
/// seller cooperation (30 days).
pub const TIMEOUT_PERIOD: u64 = 30 * 24 * 60 * 60;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidState = 4,
    ZeroAmount = 5,
    TimeoutNotElapsed = 6,
    NoFundsToRefund = 7,
    TransferFailed = 8,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub buyer: Address,
    pub seller: Address,
    pub token: Address,
    pub amount_deposited: i128,
    pub deposit_timestamp: u64,
    pub state: EscrowState,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EscrowState {
    Created,
    Locked,
    Released,
    Refunded,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Escrow,
}
