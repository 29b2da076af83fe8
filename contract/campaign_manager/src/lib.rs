#![no_std]

mod events;
mod storage_types;

#[cfg(test)]
mod test;

use soroban_sdk::{
    contract, contractclient, contractimpl, log, token, Address, Env, String,
};

pub use storage_types::{CampaignParams, ManagerError};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

/// The part of a campaign's interface the manager drives.
#[contractclient(name = "CampaignClient")]
pub trait CampaignInterface {
    fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        name: String,
        due_date: u64,
        donation_fee: u32,
        prize_pool_fee: u32,
        min_donation: i128,
        max_donation: i128,
    );
}

#[contract]
pub struct CampaignManager;

#[contractimpl]
impl CampaignManager {
    /// Initialize the manager with its owner, the token fees are paid in and
    /// the creation fee
    pub fn initialize(
        env: Env,
        owner: Address,
        fee_token: Address,
        creation_fee: i128,
    ) -> Result<(), ManagerError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(ManagerError::AlreadyInitialized);
        }
        owner.require_auth();
        if creation_fee < 0 {
            return Err(ManagerError::InvalidFee);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::FeeToken, &fee_token);
        env.storage().instance().set(&DataKey::CreationFee, &creation_fee);
        env.storage().instance().set(&DataKey::CampaignsCount, &0u32);
        Self::extend_instance(&env);

        events::emit_manager_initialized(
            &env,
            events::ManagerInitializedEvent {
                owner,
                fee_token,
                creation_fee,
            },
        );
        Ok(())
    }

    pub fn set_creation_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), ManagerError> {
        caller.require_auth();
        Self::load_as_owner(&env, &caller)?;
        if new_fee < 0 {
            return Err(ManagerError::InvalidFee);
        }

        let old_fee = Self::creation_fee(env.clone())?;
        env.storage().instance().set(&DataKey::CreationFee, &new_fee);
        Self::extend_instance(&env);

        events::emit_creation_fee_updated(&env, events::CreationFeeUpdatedEvent { old_fee, new_fee });
        Ok(())
    }

    /// Register `campaign`, a deployed but uninitialized campaign contract,
    /// with `creator` as its owner. The whole payment is kept, so it must cover
    /// the creation fee. Returns the campaign's index.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        campaign: Address,
        params: CampaignParams,
        payment: i128,
    ) -> Result<u32, ManagerError> {
        creator.require_auth();
        let creation_fee = Self::creation_fee(env.clone())?;
        if payment < creation_fee {
            return Err(ManagerError::InsufficientFee);
        }

        // A campaign initializes once, so it can only be listed once
        let initialized = CampaignClient::new(&env, &campaign).try_initialize(
            &creator,
            &params.token,
            &params.name,
            &params.due_date,
            &params.donation_fee,
            &params.prize_pool_fee,
            &params.min_donation,
            &params.max_donation,
        );
        if !matches!(initialized, Ok(Ok(()))) {
            return Err(ManagerError::CampaignRejected);
        }

        let index = Self::campaigns_count(env.clone());
        let key = PersistentKey::Campaign(index);
        env.storage().persistent().set(&key, &campaign);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
        env.storage().instance().set(&DataKey::CampaignsCount, &(index + 1));
        Self::extend_instance(&env);

        if payment > 0 {
            Self::fee_token_client(&env)?.transfer(&creator, &env.current_contract_address(), &payment);
        }

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                index,
                campaign,
                creator,
                fee_paid: payment,
            },
        );
        Ok(index)
    }

    /// Send collected fees to `destination`. Partial withdrawals are allowed.
    pub fn withdraw(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
    ) -> Result<(), ManagerError> {
        caller.require_auth();
        Self::load_as_owner(&env, &caller)?;
        if amount < 0 {
            return Err(ManagerError::InvalidAmount);
        }

        let client = Self::fee_token_client(&env)?;
        let balance = client.balance(&env.current_contract_address());
        if amount > balance {
            return Err(ManagerError::InsufficientBalance);
        }
        log!(&env, "withdrawing fees (amount, balance)", amount, balance);

        if amount > 0 {
            client.transfer(&env.current_contract_address(), &destination, &amount);
        }

        events::emit_fees_withdrawn(&env, events::FeesWithdrawnEvent { destination, amount });
        Ok(())
    }

    // Views

    pub fn owner(env: Env) -> Result<Address, ManagerError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(ManagerError::NotInitialized)
    }

    pub fn fee_token(env: Env) -> Result<Address, ManagerError> {
        env.storage()
            .instance()
            .get(&DataKey::FeeToken)
            .ok_or(ManagerError::NotInitialized)
    }

    pub fn creation_fee(env: Env) -> Result<i128, ManagerError> {
        env.storage()
            .instance()
            .get(&DataKey::CreationFee)
            .ok_or(ManagerError::NotInitialized)
    }

    /// Fees held by the manager
    pub fn balance(env: Env) -> Result<i128, ManagerError> {
        Ok(Self::fee_token_client(&env)?.balance(&env.current_contract_address()))
    }

    pub fn campaigns_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CampaignsCount)
            .unwrap_or(0)
    }

    pub fn campaign(env: Env, index: u32) -> Result<Address, ManagerError> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Campaign(index))
            .ok_or(ManagerError::InvalidIndex)
    }
}

impl CampaignManager {
    fn load_as_owner(env: &Env, caller: &Address) -> Result<(), ManagerError> {
        if *caller != Self::owner(env.clone())? {
            return Err(ManagerError::Unauthorized);
        }
        Ok(())
    }

    fn fee_token_client(env: &Env) -> Result<token::TokenClient<'_>, ManagerError> {
        Ok(token::TokenClient::new(env, &Self::fee_token(env.clone())?))
    }

    fn extend_instance(env: &Env) {
        env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
    }
}
