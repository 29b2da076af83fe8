use soroban_sdk::{token, Address, Env};

use crate::storage_types::{CampaignError, DataKey};
use crate::utils::extend_instance;

fn token_client(env: &Env) -> Result<token::TokenClient<'_>, CampaignError> {
    let token_address: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CampaignError::NotInitialized)?;
    Ok(token::TokenClient::new(env, &token_address))
}

/// Pull `amount` from `from` into the campaign's own balance.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), CampaignError> {
    if amount == 0 {
        return Ok(());
    }
    token_client(env)?.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Push `amount` from the campaign's balance to `to`.
///
/// Callers must have committed every state change that marks the effect as
/// done before calling this.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), CampaignError> {
    if amount == 0 {
        return Ok(());
    }
    token_client(env)?.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

fn read_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn add_amount(env: &Env, key: &DataKey, amount: i128) -> i128 {
    let total = read_amount(env, key) + amount;
    env.storage().instance().set(key, &total);
    extend_instance(env);
    total
}

pub fn prize_pool(env: &Env) -> i128 {
    read_amount(env, &DataKey::PrizePool)
}

pub fn fee_balance(env: &Env) -> i128 {
    read_amount(env, &DataKey::FeeBalance)
}

pub fn prize_paid(env: &Env) -> i128 {
    read_amount(env, &DataKey::PrizePaid)
}

pub fn credit_prize_pool(env: &Env, amount: i128) -> i128 {
    add_amount(env, &DataKey::PrizePool, amount)
}

pub fn credit_fees(env: &Env, amount: i128) -> i128 {
    add_amount(env, &DataKey::FeeBalance, amount)
}

pub fn record_prize_paid(env: &Env, amount: i128) -> i128 {
    add_amount(env, &DataKey::PrizePaid, amount)
}
