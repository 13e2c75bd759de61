use common::nft::interface::NftContractClient;
use soroban_sdk::{Address, Env};

pub fn get_nft_client<'a>(env: &Env, nft_contract: &Address) -> NftContractClient<'a> {
    NftContractClient::new(&env, &nft_contract)
}
