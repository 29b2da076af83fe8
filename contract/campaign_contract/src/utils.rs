use soroban_sdk::Env;

use crate::storage_types::{
    CampaignError, PersistentKey, PERCENT_DENOMINATOR, TTL_INSTANCE, TTL_PERSISTENT,
};

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}

/// Split `value` into `(net, fee)` for a percent `rate`.
///
/// The fee is floored; any remainder stays on the net side so that
/// `net + fee == value` always holds. Fails with `InvalidAmount` when
/// `value * rate` does not fit in an `i128`.
pub fn split_fee(value: i128, rate: u32) -> Result<(i128, i128), CampaignError> {
    let fee = value
        .checked_mul(rate as i128)
        .ok_or(CampaignError::InvalidAmount)?
        / PERCENT_DENOMINATOR;
    Ok((value - fee, fee))
}

/// Equal share of `pool` for each of `winners`, floored.
pub fn equal_share(pool: i128, winners: u32) -> i128 {
    if winners == 0 {
        return 0;
    }
    pool / winners as i128
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
