use super::types::{Escrow, EscrowError as Error, EscrowState};
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(env: Env, buyer: Address, seller: Address, token: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn deposit(env: Env, caller: Address, amount: i128) -> Result<(), Error>;
    fn release_funds(env: Env, caller: Address) -> Result<i128, Error>;
    fn refund(env: Env, caller: Address) -> Result<i128, Error>;
    fn cancel_with_timeout(env: Env, caller: Address) -> Result<i128, Error>;
    fn get_escrow(env: Env) -> Result<Escrow, Error>;
    fn state(env: Env) -> Result<EscrowState, Error>;
    fn balance(env: Env) -> Result<i128, Error>;
}
