use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotTokenOwner = 3,
    NotApproved = 4,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Owner(u64),    // Current owner of a token id
    Approved(u64), // Single operator approved to move a token id
    Balance(Address),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const TOKEN_COUNT: Symbol = symbol_short!("TOK_COUNT");
