use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum NftEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Approval(u64, Address, Address),
    Transfer(u64, Address, Address),
}

impl NftEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NftEvent::Initialized => stringify!(Initialized),
            NftEvent::Upgraded(..) => stringify!(Upgraded),
            NftEvent::Mint(..) => stringify!(Mint),
            NftEvent::Approval(..) => stringify!(Approval),
            NftEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            NftEvent::Initialized => {}
            NftEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            NftEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            NftEvent::Approval(token_id, owner, operator) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
            }
            NftEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
