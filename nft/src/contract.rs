use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, String, Symbol};

use crate::{
    events::NftEvent,
    storage::{
        get_data, get_persistent, has_persistent, remove_persistent, store_data, store_persistent,
    },
};
use common::nft::{
    interface::NftInterface,
    types::{DataKey, Error, ADMIN, TOKEN_COUNT},
};

const NAME: &str = "Basic NFT";
const SYMBOL: &str = "BNFT";
const TOKEN_URI: &str = "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

contractmeta!(key = "Description", val = "Basic NFT collection with sequential token ids");

#[contract]
pub struct BasicNftContract;

#[contractimpl]
impl NftInterface for BasicNftContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        NftEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        NftEvent::Upgraded(Self::version()).publish(&env);
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        if !has_persistent(&env, &DataKey::Owner(token_id)) {
            return Err(Error::TokenNotFound);
        }
        Ok(String::from_str(&env, TOKEN_URI))
    }

    fn mint(env: Env, to: Address) -> u64 {
        to.require_auth();

        let token_id: u64 = get_data(&env, &TOKEN_COUNT).unwrap_or(0);
        store_data(&env, &TOKEN_COUNT, &(token_id + 1));

        store_persistent(&env, &DataKey::Owner(token_id), &to);

        let balance: u32 = get_persistent(&env, &DataKey::Balance(to.clone())).unwrap_or(0);
        store_persistent(&env, &DataKey::Balance(to.clone()), &(balance + 1));

        NftEvent::Mint(token_id, to).publish(&env);

        token_id
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)
    }

    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let current: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if current != owner {
            return Err(Error::NotTokenOwner);
        }

        store_persistent(&env, &DataKey::Approved(token_id), &operator);
        NftEvent::Approval(token_id, owner, operator).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::Approved(token_id))
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        move_token(&env, &from, &to, token_id);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        let approved: Option<Address> = get_persistent(&env, &DataKey::Approved(token_id));
        if spender != owner && approved != Some(spender) {
            return Err(Error::NotApproved);
        }

        move_token(&env, &from, &to, token_id);
        Ok(())
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        get_persistent(&env, &DataKey::Balance(owner)).unwrap_or(0)
    }

    fn total_minted(env: Env) -> u64 {
        get_data(&env, &TOKEN_COUNT).unwrap_or(0)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::Owner(token_id))
    }
}

// Reassign ownership and adjust balances. Any standing approval for the
// token is consumed by the move.
fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) {
    if has_persistent(env, &DataKey::Approved(token_id)) {
        remove_persistent(env, &DataKey::Approved(token_id));
    }

    let from_balance: u32 = get_persistent(env, &DataKey::Balance(from.clone())).unwrap_or(0);
    store_persistent(env, &DataKey::Balance(from.clone()), &(from_balance - 1));

    let to_balance: u32 = get_persistent(env, &DataKey::Balance(to.clone())).unwrap_or(0);
    store_persistent(env, &DataKey::Balance(to.clone()), &(to_balance + 1));

    store_persistent(env, &DataKey::Owner(token_id), to);

    NftEvent::Transfer(token_id, from.clone(), to.clone()).publish(env);
}
