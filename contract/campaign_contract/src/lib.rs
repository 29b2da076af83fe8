#![no_std]

mod candidates;
mod config;
mod events;
mod payments;
mod settlement;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use storage_types::{
    CampaignConfig, CampaignError, Candidate, CandidateId, Settlement, MAX_FEE_RATE,
};
use storage_types::{DataKey, PersistentKey};
use utils::{equal_share, extend_instance, extend_persistent, split_fee};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the campaign with its owner, value token and parameters
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        name: String,
        due_date: u64,
        donation_fee: u32,
        prize_pool_fee: u32,
        min_donation: i128,
        max_donation: i128,
    ) -> Result<(), CampaignError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(CampaignError::AlreadyInitialized);
        }

        owner.require_auth();

        let campaign = CampaignConfig {
            owner: owner.clone(),
            name: name.clone(),
            due_date,
            donation_fee,
            prize_pool_fee,
            min_donation,
            max_donation,
        };
        config::validate(&campaign)?;

        config::save_config(&env, &campaign);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::CandidatesCount, &0u32);
        env.storage().instance().set(&DataKey::MaxVotes, &0u32);
        env.storage().instance().set(&DataKey::LeaderCount, &0u32);
        env.storage().instance().set(&DataKey::PrizePool, &0i128);
        env.storage().instance().set(&DataKey::PrizePaid, &0i128);
        env.storage().instance().set(&DataKey::FeeBalance, &0i128);
        extend_instance(&env);

        events::emit_campaign_initialized(
            &env,
            events::CampaignInitializedEvent {
                owner,
                name,
                due_date,
            },
        );

        Ok(())
    }

    // Owner settings

    pub fn set_name(env: Env, caller: Address, name: String) -> Result<(), CampaignError> {
        caller.require_auth();
        let mut campaign = config::load_as_owner(&env, &caller)?;

        campaign.name = name;
        config::save_config(&env, &campaign);

        events::emit_config_updated(&env, "name", caller);
        Ok(())
    }

    pub fn set_due_date(env: Env, caller: Address, due_date: u64) -> Result<(), CampaignError> {
        caller.require_auth();
        let mut campaign = config::load_as_owner(&env, &caller)?;

        campaign.due_date = due_date;
        config::save_config(&env, &campaign);

        events::emit_config_updated(&env, "due_date", caller);
        Ok(())
    }

    pub fn set_donation_fee(env: Env, caller: Address, rate: u32) -> Result<(), CampaignError> {
        caller.require_auth();
        let mut campaign = config::load_as_owner(&env, &caller)?;
        config::validate_fee_rate(rate)?;

        campaign.donation_fee = rate;
        config::save_config(&env, &campaign);

        events::emit_config_updated(&env, "donation_fee", caller);
        Ok(())
    }

    pub fn set_prize_pool_fee(env: Env, caller: Address, rate: u32) -> Result<(), CampaignError> {
        caller.require_auth();
        let mut campaign = config::load_as_owner(&env, &caller)?;
        config::validate_fee_rate(rate)?;

        campaign.prize_pool_fee = rate;
        config::save_config(&env, &campaign);

        events::emit_config_updated(&env, "prize_pool_fee", caller);
        Ok(())
    }

    pub fn set_donation_limits(
        env: Env,
        caller: Address,
        min: i128,
        max: i128,
    ) -> Result<(), CampaignError> {
        caller.require_auth();
        let mut campaign = config::load_as_owner(&env, &caller)?;
        config::validate_donation_limits(min, max)?;

        campaign.min_donation = min;
        campaign.max_donation = max;
        config::save_config(&env, &campaign);

        events::emit_config_updated(&env, "donation_limits", caller);
        Ok(())
    }

    // Candidate registry

    /// Nominate a candidate; the caller becomes its nominator
    pub fn add_candidate(
        env: Env,
        nominator: Address,
        name: String,
        payout_address: Address,
    ) -> Result<CandidateId, CampaignError> {
        nominator.require_auth();
        let campaign = config::load_config(&env)?;
        config::ensure_open(&env, &campaign)?;

        let id = candidates::next_id(&env);
        candidates::bind_payout(&env, &payout_address, id)?;

        let candidate = Candidate {
            id,
            name,
            vote_count: 0,
            is_active: true,
            payout_address: payout_address.clone(),
            nominator: nominator.clone(),
            has_withdrawn: false,
        };
        candidates::save(&env, &candidate);
        settlement::record_candidate(&env);

        events::emit_candidate_added(
            &env,
            events::CandidateAddedEvent {
                candidate_id: id,
                nominator,
                payout_address,
            },
        );

        Ok(id)
    }

    pub fn change_candidate_name(
        env: Env,
        caller: Address,
        candidate_id: CandidateId,
        name: String,
    ) -> Result<(), CampaignError> {
        caller.require_auth();
        config::load_config(&env)?;
        let mut candidate = candidates::load_as_nominator(&env, candidate_id, &caller)?;

        candidate.name = name;
        candidates::save(&env, &candidate);

        events::emit_candidate_updated(
            &env,
            events::CandidateUpdatedEvent {
                candidate_id,
                name: candidate.name,
                payout_address: candidate.payout_address,
            },
        );
        Ok(())
    }

    pub fn change_candidate_address(
        env: Env,
        caller: Address,
        candidate_id: CandidateId,
        payout_address: Address,
    ) -> Result<(), CampaignError> {
        caller.require_auth();
        config::load_config(&env)?;
        let mut candidate = candidates::load_as_nominator(&env, candidate_id, &caller)?;

        candidates::bind_payout(&env, &payout_address, candidate_id)?;
        candidates::release_payout(&env, &candidate.payout_address);

        candidate.payout_address = payout_address;
        candidates::save(&env, &candidate);

        events::emit_candidate_updated(
            &env,
            events::CandidateUpdatedEvent {
                candidate_id,
                name: candidate.name,
                payout_address: candidate.payout_address,
            },
        );
        Ok(())
    }

    pub fn disable_candidate(
        env: Env,
        caller: Address,
        candidate_id: CandidateId,
    ) -> Result<(), CampaignError> {
        Self::set_candidate_active(&env, caller, candidate_id, false)
    }

    pub fn enable_candidate(
        env: Env,
        caller: Address,
        candidate_id: CandidateId,
    ) -> Result<(), CampaignError> {
        Self::set_candidate_active(&env, caller, candidate_id, true)
    }

    // Donations and contributions

    /// Donate to an active candidate. The donation fee stays with the campaign,
    /// the rest is forwarded to the candidate's payout address.
    pub fn donate(
        env: Env,
        donor: Address,
        candidate_id: CandidateId,
        amount: i128,
    ) -> Result<(), CampaignError> {
        donor.require_auth();
        let campaign = config::load_config(&env)?;
        let candidate = candidates::load_active(&env, candidate_id)?;

        if amount < campaign.min_donation || amount > campaign.max_donation {
            return Err(CampaignError::DonationOutOfRange);
        }

        let (net_amount, fee) = split_fee(amount, campaign.donation_fee)?;
        log!(&env, "donation split (net, fee)", net_amount, fee);

        payments::collect(&env, &donor, amount)?;
        payments::credit_fees(&env, fee);
        payments::pay_out(&env, &candidate.payout_address, net_amount)?;

        events::emit_donation(
            &env,
            events::DonationEvent {
                candidate_id,
                donor,
                net_amount,
                fee,
            },
        );
        Ok(())
    }

    /// Contribute to the prize pool. Not gated by limits, candidates or deadline.
    pub fn contribute(env: Env, from: Address, amount: i128) -> Result<(), CampaignError> {
        from.require_auth();
        let campaign = config::load_config(&env)?;

        if amount < 0 {
            return Err(CampaignError::InvalidAmount);
        }

        let (pool_amount, fee) = split_fee(amount, campaign.prize_pool_fee)?;

        payments::collect(&env, &from, amount)?;
        payments::credit_prize_pool(&env, pool_amount);
        payments::credit_fees(&env, fee);

        events::emit_contribution(
            &env,
            events::ContributionEvent {
                from,
                pool_amount,
                fee,
            },
        );
        Ok(())
    }

    // Voting

    pub fn vote(env: Env, voter: Address, candidate_id: CandidateId) -> Result<(), CampaignError> {
        voter.require_auth();
        let campaign = config::load_config(&env)?;
        config::ensure_open(&env, &campaign)?;

        let voted_key = PersistentKey::Voted(voter.clone());
        if env.storage().persistent().has(&voted_key) {
            return Err(CampaignError::AlreadyVoted);
        }

        let mut candidate = candidates::load_active(&env, candidate_id)?;
        candidate.vote_count += 1;
        candidates::save(&env, &candidate);
        settlement::record_vote(&env, candidate.vote_count);

        env.storage().persistent().set(&voted_key, &true);
        extend_persistent(&env, &voted_key);

        events::emit_vote_cast(
            &env,
            events::VoteCastEvent {
                candidate_id,
                voter,
                vote_count: candidate.vote_count,
            },
        );
        Ok(())
    }

    // Settlement

    /// Pay a winning candidate its equal share of the prize pool, once.
    /// Only the candidate's payout address may collect it.
    pub fn withdraw_prize_pool(
        env: Env,
        caller: Address,
        candidate_id: CandidateId,
    ) -> Result<i128, CampaignError> {
        caller.require_auth();
        let campaign = config::load_config(&env)?;
        config::ensure_finished(&env, &campaign)?;

        if candidates::count(&env) == 0 {
            return Err(CampaignError::NoCandidates);
        }

        let snapshot = settlement::current(&env)?;
        if snapshot.pool == 0 {
            return Err(CampaignError::EmptyPrizePool);
        }

        let mut candidate = candidates::load(&env, candidate_id)?;
        if candidate.vote_count < snapshot.max_votes {
            return Err(CampaignError::NotAWinner);
        }
        if caller != candidate.payout_address {
            return Err(CampaignError::Unauthorized);
        }
        if candidate.has_withdrawn {
            return Err(CampaignError::AlreadyWithdrawn);
        }

        let share = equal_share(snapshot.pool, snapshot.winner_count);

        // Mark as paid before the transfer goes out
        settlement::freeze(&env, &snapshot);
        candidate.has_withdrawn = true;
        candidates::save(&env, &candidate);
        payments::record_prize_paid(&env, share);

        payments::pay_out(&env, &caller, share)?;

        events::emit_prize_withdrawn(
            &env,
            events::PrizeWithdrawnEvent {
                candidate_id,
                recipient: caller,
                share,
            },
        );
        Ok(share)
    }

    // Views

    pub fn get_config(env: Env) -> Result<CampaignConfig, CampaignError> {
        config::load_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, CampaignError> {
        Ok(config::load_config(&env)?.owner)
    }

    pub fn name(env: Env) -> Result<String, CampaignError> {
        Ok(config::load_config(&env)?.name)
    }

    pub fn due_date(env: Env) -> Result<u64, CampaignError> {
        Ok(config::load_config(&env)?.due_date)
    }

    pub fn donation_fee(env: Env) -> Result<u32, CampaignError> {
        Ok(config::load_config(&env)?.donation_fee)
    }

    pub fn prize_pool_fee(env: Env) -> Result<u32, CampaignError> {
        Ok(config::load_config(&env)?.prize_pool_fee)
    }

    pub fn min_donation(env: Env) -> Result<i128, CampaignError> {
        Ok(config::load_config(&env)?.min_donation)
    }

    pub fn max_donation(env: Env) -> Result<i128, CampaignError> {
        Ok(config::load_config(&env)?.max_donation)
    }

    pub fn token(env: Env) -> Result<Address, CampaignError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)
    }

    pub fn is_active(env: Env) -> Result<bool, CampaignError> {
        let campaign = config::load_config(&env)?;
        Ok(config::is_open(&env, &campaign))
    }

    pub fn prize_pool(env: Env) -> i128 {
        payments::prize_pool(&env)
    }

    pub fn prize_paid(env: Env) -> i128 {
        payments::prize_paid(&env)
    }

    /// Fees retained by the campaign. There is no way to withdraw them.
    pub fn fee_balance(env: Env) -> i128 {
        payments::fee_balance(&env)
    }

    pub fn candidates_count(env: Env) -> u32 {
        candidates::count(&env)
    }

    pub fn candidate(env: Env, candidate_id: CandidateId) -> Result<Candidate, CampaignError> {
        candidates::load(&env, candidate_id)
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        env.storage().persistent().has(&PersistentKey::Voted(voter))
    }

    /// Winning candidate ids in `start..start + limit`
    pub fn winners(
        env: Env,
        start: CandidateId,
        limit: u32,
    ) -> Result<Vec<CandidateId>, CampaignError> {
        settlement::winners(&env, start, limit)
    }

    pub fn get_settlement(env: Env) -> Option<Settlement> {
        settlement::frozen(&env)
    }
}

impl CampaignContract {
    fn set_candidate_active(
        env: &Env,
        caller: Address,
        candidate_id: CandidateId,
        active: bool,
    ) -> Result<(), CampaignError> {
        caller.require_auth();
        let campaign = config::load_config(env)?;
        let mut candidate = candidates::load_as_nominator(env, candidate_id, &caller)?;
        config::ensure_open(env, &campaign)?;

        if candidate.is_active == active {
            return Err(CampaignError::InvalidCandidate);
        }

        candidate.is_active = active;
        candidates::save(env, &candidate);

        events::emit_candidate_status(
            env,
            events::CandidateStatusEvent {
                candidate_id,
                is_active: active,
            },
        );
        Ok(())
    }
}
