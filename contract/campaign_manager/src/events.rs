use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct ManagerInitializedEvent {
    pub owner: Address,
    pub fee_token: Address,
    pub creation_fee: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CreationFeeUpdatedEvent {
    pub old_fee: i128,
    pub new_fee: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub index: u32,
    pub campaign: Address,
    pub creator: Address,
    pub fee_paid: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FeesWithdrawnEvent {
    pub destination: Address,
    pub amount: i128,
}

pub fn emit_manager_initialized(env: &Env, event: ManagerInitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "manager_initialized"),), event);
}

pub fn emit_creation_fee_updated(env: &Env, event: CreationFeeUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "creation_fee_updated"),), event);
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_fees_withdrawn(env: &Env, event: FeesWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "fees_withdrawn"),), event);
}
