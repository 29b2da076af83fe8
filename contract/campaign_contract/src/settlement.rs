use soroban_sdk::{log, Env, Vec};

use crate::candidates;
use crate::payments;
use crate::storage_types::{CampaignError, CandidateId, DataKey, Settlement};
use crate::utils::extend_instance;

/// Highest tally over all candidates, active or not, and how many share it.
pub fn leaders(env: &Env) -> (u32, u32) {
    let storage = env.storage().instance();
    (
        storage.get(&DataKey::MaxVotes).unwrap_or(0),
        storage.get(&DataKey::LeaderCount).unwrap_or(0),
    )
}

fn set_leaders(env: &Env, max_votes: u32, leader_count: u32) {
    env.storage().instance().set(&DataKey::MaxVotes, &max_votes);
    env.storage().instance().set(&DataKey::LeaderCount, &leader_count);
    extend_instance(env);
}

/// A new candidate starts with no votes and ties the leaders only while
/// nobody has been voted for.
pub fn record_candidate(env: &Env) {
    let (max_votes, leader_count) = leaders(env);
    if max_votes == 0 {
        set_leaders(env, 0, leader_count + 1);
    }
}

/// Account for a candidate whose tally just rose to `vote_count`.
pub fn record_vote(env: &Env, vote_count: u32) {
    let (max_votes, leader_count) = leaders(env);
    if vote_count > max_votes {
        set_leaders(env, vote_count, 1);
    } else if vote_count == max_votes {
        set_leaders(env, max_votes, leader_count + 1);
    }
}

pub fn frozen(env: &Env) -> Option<Settlement> {
    env.storage().instance().get(&DataKey::Settlement)
}

/// The frozen settlement if one exists, otherwise a fresh one computed from
/// the current tally and pool. A fresh one is not stored.
pub fn current(env: &Env) -> Result<Settlement, CampaignError> {
    if let Some(settlement) = frozen(env) {
        return Ok(settlement);
    }
    let (max_votes, winner_count) = leaders(env);
    Ok(Settlement {
        pool: payments::prize_pool(env),
        max_votes,
        winner_count,
    })
}

pub fn freeze(env: &Env, settlement: &Settlement) {
    if env.storage().instance().has(&DataKey::Settlement) {
        return;
    }
    log!(
        env,
        "settlement frozen (pool, max votes, winners)",
        settlement.pool,
        settlement.max_votes,
        settlement.winner_count
    );
    env.storage().instance().set(&DataKey::Settlement, settlement);
    extend_instance(env);
}

/// Winning ids among candidates `start..start + limit`, in id order.
pub fn winners(env: &Env, start: CandidateId, limit: u32) -> Result<Vec<CandidateId>, CampaignError> {
    let mut ids = Vec::new(env);
    let count = candidates::count(env);
    if count == 0 {
        return Ok(ids);
    }
    let settlement = current(env)?;
    let first = start.max(1);
    let last = first.saturating_add(limit).min(count.saturating_add(1));
    for id in first..last {
        if candidates::load(env, id)?.vote_count == settlement.max_votes {
            ids.push_back(id);
        }
    }
    Ok(ids)
}
