use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Token,
    PrizePool,
    PrizePaid,
    FeeBalance,
    CandidatesCount,
    MaxVotes,    // Highest tally so far
    LeaderCount, // Candidates holding MaxVotes
    Settlement,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Candidate(CandidateId),
    PayoutBinding(Address), // Payout address -> candidate id
    Voted(Address),
}

pub type CandidateId = u32;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub owner: Address,
    pub name: String,
    pub due_date: u64,            // Unix seconds, campaign is active strictly before it
    pub donation_fee: u32,        // Percent retained from directed donations
    pub prize_pool_fee: u32,      // Percent retained from undirected contributions
    pub min_donation: i128,
    pub max_donation: i128,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub vote_count: u32,
    pub is_active: bool,
    pub payout_address: Address,
    pub nominator: Address,
    pub has_withdrawn: bool,
}

// Frozen by the first prize withdrawal
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub pool: i128,
    pub max_votes: u32,
    pub winner_count: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized   = 1,
    NotInitialized       = 2,
    Unauthorized         = 3,
    InvalidFeeRange      = 4,
    InvalidDonationRange = 5,
    CampaignFinished     = 6,
    CampaignNotFinished  = 7,
    InvalidCandidate     = 8,
    AddressInUse         = 9,
    AlreadyVoted         = 10,
    AlreadyWithdrawn     = 11,
    DonationOutOfRange   = 12,
    NoCandidates         = 13,
    NotAWinner           = 14,
    EmptyPrizePool       = 15,
    InvalidAmount        = 16,
}

// Constants
pub const PERCENT_DENOMINATOR: i128 = 100;
pub const MAX_FEE_RATE: u32 = 100;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
