use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    FeeToken,
    CreationFee,
    CampaignsCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u32), // Zero-based position in creation order
}

/// Parameters handed to a new campaign's `initialize`
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignParams {
    pub token: Address,
    pub name: String,
    pub due_date: u64,
    pub donation_fee: u32,
    pub prize_pool_fee: u32,
    pub min_donation: i128,
    pub max_donation: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    AlreadyInitialized  = 1,
    NotInitialized      = 2,
    Unauthorized        = 3,
    InvalidFee          = 4,
    InsufficientFee     = 5,
    CampaignRejected    = 6,
    InvalidIndex        = 7,
    InvalidAmount       = 8,
    InsufficientBalance = 9,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
