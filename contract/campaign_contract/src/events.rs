use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CandidateId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignInitializedEvent {
    pub owner: Address,
    pub name: String,
    pub due_date: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ConfigUpdatedEvent {
    pub field: Symbol,
    pub caller: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CandidateAddedEvent {
    pub candidate_id: CandidateId,
    pub nominator: Address,
    pub payout_address: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CandidateUpdatedEvent {
    pub candidate_id: CandidateId,
    pub name: String,
    pub payout_address: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CandidateStatusEvent {
    pub candidate_id: CandidateId,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationEvent {
    pub candidate_id: CandidateId,
    pub donor: Address,
    pub net_amount: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionEvent {
    pub from: Address,
    pub pool_amount: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub candidate_id: CandidateId,
    pub voter: Address,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct PrizeWithdrawnEvent {
    pub candidate_id: CandidateId,
    pub recipient: Address,
    pub share: i128,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_initialized"),), event);
}

pub fn emit_config_updated(env: &Env, field: &str, caller: Address) {
    let field = Symbol::new(env, field);
    env.events().publish(
        (Symbol::new(env, "config_updated"),),
        ConfigUpdatedEvent { field, caller },
    );
}

pub fn emit_candidate_added(env: &Env, event: CandidateAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_added"),), event);
}

pub fn emit_candidate_updated(env: &Env, event: CandidateUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_updated"),), event);
}

pub fn emit_candidate_status(env: &Env, event: CandidateStatusEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_status"),), event);
}

pub fn emit_donation(env: &Env, event: DonationEvent) {
    env.events().publish((Symbol::new(env, "donation"),), event);
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution"),), event);
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn emit_prize_withdrawn(env: &Env, event: PrizeWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "prize_withdrawn"),), event);
}
