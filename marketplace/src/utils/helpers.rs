use soroban_sdk::{token, Address, Env};

use crate::{
    storage::{get_data, get_persistent, store_persistent},
    types::{DataKey, Error, Listing, PAYMENT_TOKEN},
};

pub fn read_listing(env: &Env, nft_contract: &Address, token_id: u64) -> Result<Listing, Error> {
    get_persistent(env, &DataKey::Listing(nft_contract.clone(), token_id)).ok_or(Error::NotListed)
}

pub fn read_proceeds(env: &Env, seller: &Address) -> i128 {
    get_persistent(env, &DataKey::Proceeds(seller.clone())).unwrap_or(0)
}

pub fn credit_proceeds(env: &Env, seller: &Address, amount: i128) {
    let current: i128 = read_proceeds(env, seller);
    store_persistent(env, &DataKey::Proceeds(seller.clone()), &(current + amount));
}

// Pull the buyer's payment into the contract account. The token contract
// rejects the transfer itself when the buyer cannot cover the amount.
pub fn collect_payment(env: &Env, from: &Address, amount: i128) {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    let token_client: token::Client<'_> = token::Client::new(&env, &token_addr);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

pub fn pay_out(env: &Env, to: &Address, amount: i128) {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    let token_client: token::Client<'_> = token::Client::new(&env, &token_addr);
    token_client.transfer(&env.current_contract_address(), &to, &amount);
}
