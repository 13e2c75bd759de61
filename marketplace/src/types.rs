use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotOwner = 2,
    PriceMustBeAboveZero = 3,
    NotApprovedForMarketplace = 4,
    AlreadyListed = 5,
    NotListed = 6,
    PriceNotMet = 7,
    NotEnoughMoney = 8,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(Address, u64), // (nft contract, token id)
    Proceeds(Address),     // Sale funds a seller has not withdrawn yet
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
