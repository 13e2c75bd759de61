use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum MarketplaceEvent {
    Initialized(Address),
    Upgraded(u32),
    ItemListed(Address, Address, u64, i128),
    ItemCanceled(Address, Address, u64),
    ItemUpdated(Address, Address, u64, i128),
    ItemBought(Address, Address, u64, i128),
    ItemWithdraw(Address, i128),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Upgraded(..) => stringify!(Upgraded),
            MarketplaceEvent::ItemListed(..) => stringify!(ItemListed),
            MarketplaceEvent::ItemCanceled(..) => stringify!(ItemCanceled),
            MarketplaceEvent::ItemUpdated(..) => stringify!(ItemUpdated),
            MarketplaceEvent::ItemBought(..) => stringify!(ItemBought),
            MarketplaceEvent::ItemWithdraw(..) => stringify!(ItemWithdraw),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            MarketplaceEvent::Initialized(payment_token) => {
                v.push_back(payment_token.into_val(env));
            }
            MarketplaceEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            MarketplaceEvent::ItemListed(seller, nft_contract, token_id, price) => {
                v.push_back(seller.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(price.into_val(env));
            }
            MarketplaceEvent::ItemCanceled(seller, nft_contract, token_id) => {
                v.push_back(seller.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(token_id.into_val(env));
            }
            MarketplaceEvent::ItemUpdated(seller, nft_contract, token_id, new_price) => {
                v.push_back(seller.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(new_price.into_val(env));
            }
            MarketplaceEvent::ItemBought(buyer, nft_contract, token_id, price) => {
                v.push_back(buyer.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(price.into_val(env));
            }
            MarketplaceEvent::ItemWithdraw(seller, amount) => {
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
