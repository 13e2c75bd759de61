use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String};

#[contractclient(name = "NftContractClient")]
pub trait NftInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn mint(env: Env, to: Address) -> u64;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
    fn total_minted(env: Env) -> u64;
    fn exists(env: Env, token_id: u64) -> bool;
}
