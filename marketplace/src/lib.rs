#![no_std]
#![allow(clippy::unused_unit)]

mod events;
mod storage;
mod types;
mod utils;

use events::MarketplaceEvent;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, Symbol};
use storage::{
    get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
    store_persistent,
};
use types::{DataKey, Error, Listing, ADMIN, PAYMENT_TOKEN};
use utils::{
    contract_clients::get_nft_client,
    helpers::{collect_payment, credit_proceeds, pay_out, read_listing, read_proceeds},
};

contractmeta!(key = "Description", val = "NFT marketplace with a seller proceeds ledger");

#[contract]
pub struct MarketplaceContract;

#[allow(dead_code)]
#[contractimpl]
impl MarketplaceContract {
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);

        MarketplaceEvent::Initialized(payment_token).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        MarketplaceEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn list_item(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if has_persistent(&env, &DataKey::Listing(nft_contract.clone(), token_id)) {
            return Err(Error::AlreadyListed);
        }

        let nft_client = get_nft_client(&env, &nft_contract);
        if nft_client.owner_of(&token_id) != seller {
            return Err(Error::NotOwner);
        }

        if price <= 0 {
            return Err(Error::PriceMustBeAboveZero);
        }

        // The seller keeps the token; the listing only works if this
        // contract holds the transfer approval for it.
        if nft_client.get_approved(&token_id) != Some(env.current_contract_address()) {
            return Err(Error::NotApprovedForMarketplace);
        }

        let listing: Listing = Listing {
            seller: seller.clone(),
            price,
        };
        store_persistent(
            &env,
            &DataKey::Listing(nft_contract.clone(), token_id),
            &listing,
        );

        MarketplaceEvent::ItemListed(seller, nft_contract, token_id, price).publish(&env);
        Ok(())
    }

    pub fn cancel_listing(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        if get_nft_client(&env, &nft_contract).owner_of(&token_id) != seller {
            return Err(Error::NotOwner);
        }

        if !has_persistent(&env, &DataKey::Listing(nft_contract.clone(), token_id)) {
            return Err(Error::NotListed);
        }

        remove_persistent(&env, &DataKey::Listing(nft_contract.clone(), token_id));

        MarketplaceEvent::ItemCanceled(seller, nft_contract, token_id).publish(&env);
        Ok(())
    }

    pub fn update_listing(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u64,
        new_price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if get_nft_client(&env, &nft_contract).owner_of(&token_id) != seller {
            return Err(Error::NotOwner);
        }

        let mut listing: Listing = read_listing(&env, &nft_contract, token_id)?;

        if new_price <= 0 {
            return Err(Error::PriceMustBeAboveZero);
        }

        listing.price = new_price;
        store_persistent(
            &env,
            &DataKey::Listing(nft_contract.clone(), token_id),
            &listing,
        );

        MarketplaceEvent::ItemUpdated(seller, nft_contract, token_id, new_price).publish(&env);
        Ok(())
    }

    pub fn buy_item(
        env: Env,
        buyer: Address,
        nft_contract: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let listing: Listing = read_listing(&env, &nft_contract, token_id)?;

        if amount < listing.price {
            return Err(Error::PriceNotMet);
        }

        collect_payment(&env, &buyer, amount);

        // The full paid amount goes to the seller, overpayment included.
        credit_proceeds(&env, &listing.seller, amount);
        remove_persistent(&env, &DataKey::Listing(nft_contract.clone(), token_id));

        get_nft_client(&env, &nft_contract).transfer_from(
            &env.current_contract_address(),
            &listing.seller,
            &buyer,
            &token_id,
        );

        MarketplaceEvent::ItemBought(buyer, nft_contract, token_id, listing.price).publish(&env);
        Ok(())
    }

    pub fn withdraw_proceeds(env: Env, seller: Address) -> Result<i128, Error> {
        seller.require_auth();

        let amount: i128 = read_proceeds(&env, &seller);
        if amount <= 0 {
            return Err(Error::NotEnoughMoney);
        }

        // Zero the ledger entry before funds move
        remove_persistent(&env, &DataKey::Proceeds(seller.clone()));
        pay_out(&env, &seller, amount);

        MarketplaceEvent::ItemWithdraw(seller, amount).publish(&env);
        Ok(amount)
    }

    pub fn get_listing(env: Env, nft_contract: Address, token_id: u64) -> Option<Listing> {
        get_persistent(&env, &DataKey::Listing(nft_contract, token_id))
    }

    pub fn get_proceeds(env: Env, seller: Address) -> i128 {
        read_proceeds(&env, &seller)
    }
}
