use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized,
    Deposited(Address, i128),
    Released(Address, i128),
    Refunded(Address, i128),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized => stringify!(Initialized),
            EscrowEvent::Deposited(..) => stringify!(Deposited),
            EscrowEvent::Released(..) => stringify!(Released),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            EscrowEvent::Initialized => {}
            EscrowEvent::Deposited(buyer, amount) => {
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Released(seller, amount) => {
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::Refunded(buyer, amount) => {
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
