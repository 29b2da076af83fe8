use soroban_sdk::{Address, Env};

use crate::storage_types::{Candidate, CampaignError, CandidateId, DataKey, PersistentKey};
use crate::utils::{extend_instance, extend_persistent};

pub fn count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::CandidatesCount).unwrap_or(0)
}

/// Allocate the next sequential id. Ids start at 1 and are never reused.
pub fn next_id(env: &Env) -> CandidateId {
    let id = count(env) + 1;
    env.storage().instance().set(&DataKey::CandidatesCount, &id);
    extend_instance(env);
    id
}

pub fn load(env: &Env, id: CandidateId) -> Result<Candidate, CampaignError> {
    if id == 0 || id > count(env) {
        return Err(CampaignError::InvalidCandidate);
    }
    env.storage()
        .persistent()
        .get(&PersistentKey::Candidate(id))
        .ok_or(CampaignError::InvalidCandidate)
}

/// Load a candidate that must currently be active.
pub fn load_active(env: &Env, id: CandidateId) -> Result<Candidate, CampaignError> {
    let candidate = load(env, id)?;
    if !candidate.is_active {
        return Err(CampaignError::InvalidCandidate);
    }
    Ok(candidate)
}

/// Load a candidate on behalf of `caller`, who must be its nominator.
pub fn load_as_nominator(
    env: &Env,
    id: CandidateId,
    caller: &Address,
) -> Result<Candidate, CampaignError> {
    let candidate = load(env, id)?;
    if *caller != candidate.nominator {
        return Err(CampaignError::Unauthorized);
    }
    Ok(candidate)
}

pub fn save(env: &Env, candidate: &Candidate) {
    let key = PersistentKey::Candidate(candidate.id);
    env.storage().persistent().set(&key, candidate);
    extend_persistent(env, &key);
}

fn is_bound(env: &Env, payout_address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::PayoutBinding(payout_address.clone()))
}

/// Bind `payout_address` to candidate `id`. An address already bound to any
/// record, active or not, is rejected.
pub fn bind_payout(env: &Env, payout_address: &Address, id: CandidateId) -> Result<(), CampaignError> {
    if is_bound(env, payout_address) {
        return Err(CampaignError::AddressInUse);
    }
    let key = PersistentKey::PayoutBinding(payout_address.clone());
    env.storage().persistent().set(&key, &id);
    extend_persistent(env, &key);
    Ok(())
}

pub fn release_payout(env: &Env, payout_address: &Address) {
    env.storage()
        .persistent()
        .remove(&PersistentKey::PayoutBinding(payout_address.clone()));
}
