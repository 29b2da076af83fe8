use soroban_sdk::{Address, Env};

use crate::storage_types::{CampaignConfig, CampaignError, DataKey, MAX_FEE_RATE};
use crate::utils::{extend_instance, is_future};

pub fn load_config(env: &Env) -> Result<CampaignConfig, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CampaignError::NotInitialized)
}

pub fn save_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

/// Load the config and check that `caller` is its owner.
pub fn load_as_owner(env: &Env, caller: &Address) -> Result<CampaignConfig, CampaignError> {
    let config = load_config(env)?;
    if *caller != config.owner {
        return Err(CampaignError::Unauthorized);
    }
    Ok(config)
}

pub fn validate_fee_rate(rate: u32) -> Result<(), CampaignError> {
    if rate > MAX_FEE_RATE {
        return Err(CampaignError::InvalidFeeRange);
    }
    Ok(())
}

pub fn validate_donation_limits(min: i128, max: i128) -> Result<(), CampaignError> {
    if min < 0 || min > max {
        return Err(CampaignError::InvalidDonationRange);
    }
    Ok(())
}

pub fn validate(config: &CampaignConfig) -> Result<(), CampaignError> {
    validate_fee_rate(config.donation_fee)?;
    validate_fee_rate(config.prize_pool_fee)?;
    validate_donation_limits(config.min_donation, config.max_donation)
}

/// The campaign is open before its due date, and only until settlement begins.
///
/// Recomputed on every call since the owner may move `due_date` at any time.
pub fn is_open(env: &Env, config: &CampaignConfig) -> bool {
    is_future(env, config.due_date) && !env.storage().instance().has(&DataKey::Settlement)
}

pub fn ensure_open(env: &Env, config: &CampaignConfig) -> Result<(), CampaignError> {
    if !is_open(env, config) {
        return Err(CampaignError::CampaignFinished);
    }
    Ok(())
}

/// Settlement waits for the due date alone. A frozen snapshot does not lift it.
pub fn ensure_finished(env: &Env, config: &CampaignConfig) -> Result<(), CampaignError> {
    if is_future(env, config.due_date) {
        return Err(CampaignError::CampaignNotFinished);
    }
    Ok(())
}
