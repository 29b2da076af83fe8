#![cfg(test)]

use super::*;
use campaign_contract::{CampaignContract, CampaignContractClient, CampaignError};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

const NOW: u64 = 1_000;
const DUE_DATE: u64 = 10_000;
const CREATION_FEE: i128 = 1_000;

fn create_token_contract<'a>(e: &Env, admin: &Address) -> token::StellarAssetClient<'a> {
    token::StellarAssetClient::new(e, &e.register_stellar_asset_contract_v2(admin.clone()).address())
}

fn create_manager_contract<'a>(e: &Env) -> CampaignManagerClient<'a> {
    CampaignManagerClient::new(e, &e.register(CampaignManager, ()))
}

struct Setup<'a> {
    env: Env,
    owner: Address,
    asset: token::StellarAssetClient<'a>,
    token: token::Client<'a>,
    manager: CampaignManagerClient<'a>,
}

impl<'a> Setup<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(NOW);

        let owner = Address::generate(&env);
        let token_admin = Address::generate(&env);
        let asset = create_token_contract(&env, &token_admin);
        let token = token::Client::new(&env, &asset.address);
        let manager = create_manager_contract(&env);
        manager.initialize(&owner, &asset.address, &CREATION_FEE);

        Setup {
            env,
            owner,
            asset,
            token,
            manager,
        }
    }

    fn params(&self, name: &str) -> CampaignParams {
        CampaignParams {
            token: self.asset.address.clone(),
            name: String::from_str(&self.env, name),
            due_date: DUE_DATE,
            donation_fee: 5,
            prize_pool_fee: 1,
            min_donation: 100,
            max_donation: 1000,
        }
    }

    fn funded(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        self.asset.mint(&account, &amount);
        account
    }

    fn blank_campaign(&self) -> CampaignContractClient<'a> {
        CampaignContractClient::new(&self.env, &self.env.register(CampaignContract, ()))
    }

    /// Create a campaign paying exactly the creation fee.
    fn create(&self, name: &str) -> (u32, Address, CampaignContractClient<'a>) {
        let creator = self.funded(CREATION_FEE);
        let campaign = self.blank_campaign();
        let index = self.manager.create_campaign(
            &creator,
            &campaign.address,
            &self.params(name),
            &CREATION_FEE,
        );
        (index, creator, campaign)
    }
}

#[test]
fn test_initialize() {
    let s = Setup::new();

    assert_eq!(s.manager.owner(), s.owner);
    assert_eq!(s.manager.fee_token(), s.asset.address);
    assert_eq!(s.manager.creation_fee(), CREATION_FEE);
    assert_eq!(s.manager.campaigns_count(), 0);
    assert_eq!(s.manager.balance(), 0);

    assert_eq!(
        s.manager.try_initialize(&s.owner, &s.asset.address, &CREATION_FEE),
        Err(Ok(ManagerError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_rejects_negative_fee() {
    let env = Env::default();
    env.mock_all_auths();
    let manager = create_manager_contract(&env);
    let owner = Address::generate(&env);
    let token = Address::generate(&env);

    assert_eq!(
        manager.try_initialize(&owner, &token, &-1),
        Err(Ok(ManagerError::InvalidFee))
    );
    assert_eq!(manager.try_owner(), Err(Ok(ManagerError::NotInitialized)));
}

#[test]
fn test_owner_can_change_creation_fee() {
    let s = Setup::new();

    s.manager.set_creation_fee(&s.owner, &2_000);
    assert_eq!(s.manager.creation_fee(), 2_000);

    let stranger = Address::generate(&s.env);
    assert_eq!(
        s.manager.try_set_creation_fee(&stranger, &0),
        Err(Ok(ManagerError::Unauthorized))
    );
    assert_eq!(
        s.manager.try_set_creation_fee(&s.owner, &-5),
        Err(Ok(ManagerError::InvalidFee))
    );
    assert_eq!(s.manager.creation_fee(), 2_000);
}

#[test]
fn test_create_campaign() {
    let s = Setup::new();
    let (index, creator, campaign) = s.create("Campaign1");

    assert_eq!(index, 0);
    assert_eq!(s.manager.campaigns_count(), 1);
    assert_eq!(s.manager.campaign(&0), campaign.address);
    assert_eq!(s.manager.balance(), CREATION_FEE);
    assert_eq!(s.token.balance(&creator), 0);

    // The creator owns the campaign, not the manager
    let config = campaign.get_config();
    assert_eq!(config.owner, creator);
    assert_eq!(config.name, String::from_str(&s.env, "Campaign1"));
    assert_eq!(config.due_date, DUE_DATE);
    assert_eq!(config.donation_fee, 5);
    assert_eq!(config.prize_pool_fee, 1);
    assert_eq!(config.min_donation, 100);
    assert_eq!(config.max_donation, 1000);
    assert_eq!(campaign.token(), s.asset.address);
    assert!(campaign.is_active());

    campaign.set_name(&creator, &String::from_str(&s.env, "Renamed"));
    assert_eq!(
        campaign.try_set_name(&s.owner, &String::from_str(&s.env, "Taken")),
        Err(Ok(CampaignError::Unauthorized))
    );
}

#[test]
fn test_campaigns_are_listed_in_creation_order() {
    let s = Setup::new();
    let (first, _, a) = s.create("Campaign1");
    let (second, _, b) = s.create("Campaign2");

    assert_eq!((first, second), (0, 1));
    assert_eq!(s.manager.campaigns_count(), 2);
    assert_eq!(s.manager.campaign(&0), a.address);
    assert_eq!(s.manager.campaign(&1), b.address);
    assert_eq!(s.manager.try_campaign(&2), Err(Ok(ManagerError::InvalidIndex)));
    assert_eq!(s.manager.balance(), 2 * CREATION_FEE);
}

#[test]
fn test_overpayment_is_kept() {
    let s = Setup::new();
    let creator = s.funded(5_000);
    let campaign = s.blank_campaign();

    s.manager
        .create_campaign(&creator, &campaign.address, &s.params("Campaign1"), &5_000);

    assert_eq!(s.manager.balance(), 5_000);
    assert_eq!(s.token.balance(&creator), 0);
}

#[test]
fn test_create_campaign_requires_fee() {
    let s = Setup::new();
    let creator = s.funded(CREATION_FEE);
    let campaign = s.blank_campaign();

    assert_eq!(
        s.manager.try_create_campaign(
            &creator,
            &campaign.address,
            &s.params("Campaign1"),
            &(CREATION_FEE - 1)
        ),
        Err(Ok(ManagerError::InsufficientFee))
    );
    assert_eq!(s.manager.campaigns_count(), 0);
    assert_eq!(s.token.balance(&creator), CREATION_FEE);
    assert_eq!(campaign.try_get_config(), Err(Ok(CampaignError::NotInitialized)));
}

#[test]
fn test_rejected_campaign_is_not_listed() {
    let s = Setup::new();
    let creator = s.funded(2 * CREATION_FEE);

    let mut params = s.params("Campaign1");
    params.donation_fee = 101;
    let campaign = s.blank_campaign();
    assert_eq!(
        s.manager
            .try_create_campaign(&creator, &campaign.address, &params, &CREATION_FEE),
        Err(Ok(ManagerError::CampaignRejected))
    );
    assert_eq!(campaign.try_get_config(), Err(Ok(CampaignError::NotInitialized)));

    // A campaign can only be registered once
    let (_, _, listed) = s.create("Campaign2");
    assert_eq!(
        s.manager.try_create_campaign(
            &creator,
            &listed.address,
            &s.params("Campaign3"),
            &CREATION_FEE
        ),
        Err(Ok(ManagerError::CampaignRejected))
    );

    assert_eq!(s.manager.campaigns_count(), 1);
    assert_eq!(s.token.balance(&creator), 2 * CREATION_FEE);
}

#[test]
fn test_owner_can_withdraw_fees() {
    let s = Setup::new();
    s.create("Campaign1");
    let destination = Address::generate(&s.env);

    s.manager.withdraw(&s.owner, &destination, &CREATION_FEE);

    assert_eq!(s.token.balance(&destination), CREATION_FEE);
    assert_eq!(s.manager.balance(), 0);
}

#[test]
fn test_owner_can_withdraw_fees_in_parts() {
    let s = Setup::new();
    s.manager.set_creation_fee(&s.owner, &10_000);
    let creator = s.funded(10_000);
    let campaign = s.blank_campaign();
    s.manager
        .create_campaign(&creator, &campaign.address, &s.params("Campaign1"), &10_000);
    let destination = Address::generate(&s.env);

    s.manager.withdraw(&s.owner, &destination, &2_000);
    assert_eq!(s.token.balance(&destination), 2_000);
    assert_eq!(s.manager.balance(), 8_000);

    s.manager.withdraw(&s.owner, &destination, &8_000);
    assert_eq!(s.token.balance(&destination), 10_000);
    assert_eq!(s.manager.balance(), 0);
}

#[test]
fn test_withdraw_checks_caller_and_amount() {
    let s = Setup::new();
    s.create("Campaign1");
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.manager.try_withdraw(&stranger, &stranger, &CREATION_FEE),
        Err(Ok(ManagerError::Unauthorized))
    );
    assert_eq!(
        s.manager.try_withdraw(&s.owner, &s.owner, &(CREATION_FEE + 1)),
        Err(Ok(ManagerError::InsufficientBalance))
    );
    assert_eq!(
        s.manager.try_withdraw(&s.owner, &s.owner, &-1),
        Err(Ok(ManagerError::InvalidAmount))
    );
    assert_eq!(s.manager.balance(), CREATION_FEE);
    assert_eq!(s.token.balance(&stranger), 0);
}
