#![no_std]

mod events;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{
        Escrow, EscrowDataKey as DataKey, EscrowError as Error, EscrowState, TIMEOUT_PERIOD,
    },
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, token, Address, Env};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    // Bind the two parties and the payment token. The buyer is the only
    // identity allowed to mutate the escrow afterwards.
    fn initialize(env: Env, buyer: Address, seller: Address, token: Address) -> Result<(), Error> {
        buyer.require_auth();
        if env.storage().instance().has(&DataKey::Escrow) {
            return Err(Error::AlreadyInitialized);
        }

        let escrow: Escrow = Escrow {
            buyer,
            seller,
            token,
            amount_deposited: 0,
            deposit_timestamp: 0,
            state: EscrowState::Created,
        };
        env.storage().instance().set(&DataKey::Escrow, &escrow);
        EscrowEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    // Lock the buyer's funds in custody. Only valid once, from `Created`.
    fn deposit(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let mut escrow: Escrow = read_escrow(&env)?;
        require_buyer(&escrow, &caller)?;

        if !matches!(escrow.state, EscrowState::Created) {
            return Err(Error::InvalidState);
        }
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let token_client: token::TokenClient<'_> = token::Client::new(&env, &escrow.token);
        if token_client
            .try_transfer(&caller, &env.current_contract_address(), &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }

        escrow.amount_deposited = amount;
        escrow.deposit_timestamp = env.ledger().timestamp();
        escrow.state = EscrowState::Locked;
        env.storage().instance().set(&DataKey::Escrow, &escrow);

        EscrowEvent::Deposited(escrow.buyer, amount).publish(&env);
        Ok(())
    }

    // Release custodied funds to the seller.
    // The terminal state is committed before the outbound transfer so a
    // re-entering transfer primitive can never observe `Locked` again; a
    // failed transfer fails this frame and the host rolls the write back.
    fn release_funds(env: Env, caller: Address) -> Result<i128, Error> {
        let mut escrow: Escrow = read_escrow(&env)?;
        require_buyer(&escrow, &caller)?;

        if !matches!(escrow.state, EscrowState::Locked) {
            return Err(Error::InvalidState);
        }
        if escrow.amount_deposited <= 0 {
            return Err(Error::InvalidState);
        }

        let amount: i128 = escrow.amount_deposited;
        escrow.state = EscrowState::Released;
        escrow.amount_deposited = 0;
        env.storage().instance().set(&DataKey::Escrow, &escrow);

        let token_client: token::TokenClient<'_> = token::Client::new(&env, &escrow.token);
        if token_client
            .try_transfer(&env.current_contract_address(), &escrow.seller, &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }

        EscrowEvent::Released(escrow.seller, amount).publish(&env);
        Ok(amount)
    }

    // Voluntary refund: the buyer returns the escrow to themselves while
    // funds are still locked.
    fn refund(env: Env, caller: Address) -> Result<i128, Error> {
        let escrow: Escrow = read_escrow(&env)?;
        require_buyer(&escrow, &caller)?;

        if !matches!(escrow.state, EscrowState::Locked) {
            return Err(Error::InvalidState);
        }

        refund_to_buyer(&env, escrow)
    }

    // Unilateral refund once the seller has been inactive for the full
    // timeout period after deposit.
    fn cancel_with_timeout(env: Env, caller: Address) -> Result<i128, Error> {
        let escrow: Escrow = read_escrow(&env)?;
        require_buyer(&escrow, &caller)?;

        if !matches!(escrow.state, EscrowState::Locked) {
            return Err(Error::InvalidState);
        }

        let now: u64 = env.ledger().timestamp();
        if now <= escrow.deposit_timestamp + TIMEOUT_PERIOD {
            return Err(Error::TimeoutNotElapsed);
        }

        refund_to_buyer(&env, escrow)
    }

    fn get_escrow(env: Env) -> Result<Escrow, Error> {
        read_escrow(&env)
    }

    fn state(env: Env) -> Result<EscrowState, Error> {
        let escrow: Escrow = read_escrow(&env)?;
        Ok(escrow.state)
    }

    fn balance(env: Env) -> Result<i128, Error> {
        let escrow: Escrow = read_escrow(&env)?;
        Ok(escrow.amount_deposited)
    }
}

fn read_escrow(env: &Env) -> Result<Escrow, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Escrow)
        .ok_or(Error::NotInitialized)
}

fn require_buyer(escrow: &Escrow, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != escrow.buyer {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

// Shared by `refund` and `cancel_with_timeout`; callers have already
// checked auth and the `Locked` state. Same commit ordering as release:
// terminal state first, then the outbound transfer, with the host
// reverting the write if the transfer fails.
fn refund_to_buyer(env: &Env, mut escrow: Escrow) -> Result<i128, Error> {
    // Unreachable while `Locked` implies a positive balance; kept as a
    // guard against tampered storage.
    if escrow.amount_deposited <= 0 {
        return Err(Error::NoFundsToRefund);
    }

    let amount: i128 = escrow.amount_deposited;
    escrow.state = EscrowState::Refunded;
    escrow.amount_deposited = 0;
    env.storage().instance().set(&DataKey::Escrow, &escrow);

    let token_client: token::TokenClient<'_> = token::Client::new(env, &escrow.token);
    if token_client
        .try_transfer(&env.current_contract_address(), &escrow.buyer, &amount)
        .is_err()
    {
        return Err(Error::TransferFailed);
    }

    EscrowEvent::Refunded(escrow.buyer, amount).publish(env);
    Ok(amount)
}
