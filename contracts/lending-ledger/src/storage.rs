use soroban_sdk::{contracttype, Address, Env};

use crate::constants::*;
use crate::errors::Error;

// Storage key types for the contract
#[contracttype]
pub enum DataKey {
    Owner,                   // Address
    AllowedAsset,            // Address of the collateral/debt token
    Paused,                  // bool
    InterestRateBps,         // u32, stored but never applied to balances
    LiquidationThresholdBps, // u32
    RewardMultiplierBps,     // u32, liquidation bonus on the repaid amount
    MaxSeizeFractionBps,     // u32, cap on the share of collateral seized per call
    TotalDeposits,           // u128
    TotalBorrows,            // u128
    Initialized,             // bool flag to prevent re-initialization
    // Per-account records
    Deposit(Address), // u128 deposit amount
    Borrow(Address),  // BorrowRecord
    Reward(Address),  // u128 accrued liquidator reward
}

/// Open debt with the collateral copied at the last borrow.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BorrowRecord {
    pub debt_amount: u128,
    pub collateral_snapshot: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolStats {
    pub total_deposits: u128,
    pub total_borrows: u128,
    pub interest_rate_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolConfig {
    pub owner: Address,
    pub allowed_asset: Address,
    pub paused: bool,
    pub interest_rate_bps: u32,
    pub liquidation_threshold_bps: u32,
    pub reward_multiplier_bps: u32,
    pub max_seize_fraction_bps: u32,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn mark_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

pub fn read_allowed_asset(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::AllowedAsset)
        .ok_or(Error::NotInitialized)
}

pub fn write_allowed_asset(env: &Env, asset: &Address) {
    env.storage().persistent().set(&DataKey::AllowedAsset, asset);
}

pub fn read_paused(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().persistent().set(&DataKey::Paused, &paused);
}

fn read_bps(env: &Env, key: &DataKey, default: u32) -> u32 {
    env.storage().persistent().get(key).unwrap_or(default)
}

pub fn read_interest_rate_bps(env: &Env) -> u32 {
    read_bps(env, &DataKey::InterestRateBps, MIN_INTEREST_RATE_BPS)
}

pub fn write_interest_rate_bps(env: &Env, bps: u32) {
    env.storage().persistent().set(&DataKey::InterestRateBps, &bps);
}

pub fn read_liquidation_threshold_bps(env: &Env) -> u32 {
    read_bps(
        env,
        &DataKey::LiquidationThresholdBps,
        MIN_LIQUIDATION_THRESHOLD_BPS,
    )
}

pub fn write_liquidation_threshold_bps(env: &Env, bps: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::LiquidationThresholdBps, &bps);
}

pub fn read_reward_multiplier_bps(env: &Env) -> u32 {
    read_bps(
        env,
        &DataKey::RewardMultiplierBps,
        DEFAULT_REWARD_MULTIPLIER_BPS,
    )
}

pub fn read_max_seize_fraction_bps(env: &Env) -> u32 {
    read_bps(
        env,
        &DataKey::MaxSeizeFractionBps,
        DEFAULT_MAX_SEIZE_FRACTION_BPS,
    )
}

pub fn write_liquidation_reward(env: &Env, multiplier_bps: u32, max_seize_fraction_bps: u32) {
    let persistent = env.storage().persistent();
    persistent.set(&DataKey::RewardMultiplierBps, &multiplier_bps);
    persistent.set(&DataKey::MaxSeizeFractionBps, &max_seize_fraction_bps);
}

pub fn read_total_deposits(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalDeposits)
        .unwrap_or(0u128)
}

pub fn write_total_deposits(env: &Env, total: u128) {
    env.storage().persistent().set(&DataKey::TotalDeposits, &total);
}

pub fn read_total_borrows(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalBorrows)
        .unwrap_or(0u128)
}

pub fn write_total_borrows(env: &Env, total: u128) {
    env.storage().persistent().set(&DataKey::TotalBorrows, &total);
}

pub fn read_deposit(env: &Env, account: &Address) -> u128 {
    let key = DataKey::Deposit(account.clone());
    let amount = env.storage().persistent().get(&key).unwrap_or(0u128);
    bump_account_ttl(env, &key);
    amount
}

pub fn write_deposit(env: &Env, account: &Address, amount: u128) {
    let key = DataKey::Deposit(account.clone());
    env.storage().persistent().set(&key, &amount);
    bump_account_ttl(env, &key);
}

pub fn read_borrow(env: &Env, account: &Address) -> Option<BorrowRecord> {
    let key = DataKey::Borrow(account.clone());
    let record = env.storage().persistent().get(&key);
    bump_account_ttl(env, &key);
    record
}

pub fn write_borrow(env: &Env, account: &Address, record: &BorrowRecord) {
    let key = DataKey::Borrow(account.clone());
    env.storage().persistent().set(&key, record);
    bump_account_ttl(env, &key);
}

pub fn read_reward(env: &Env, account: &Address) -> u128 {
    let key = DataKey::Reward(account.clone());
    let amount = env.storage().persistent().get(&key).unwrap_or(0u128);
    bump_account_ttl(env, &key);
    amount
}

pub fn write_reward(env: &Env, account: &Address, amount: u128) {
    let key = DataKey::Reward(account.clone());
    env.storage().persistent().set(&key, &amount);
    bump_account_ttl(env, &key);
}

pub fn protocol_stats(env: &Env) -> ProtocolStats {
    ProtocolStats {
        total_deposits: read_total_deposits(env),
        total_borrows: read_total_borrows(env),
        interest_rate_bps: read_interest_rate_bps(env),
    }
}

pub fn protocol_config(env: &Env) -> Result<ProtocolConfig, Error> {
    Ok(ProtocolConfig {
        owner: read_owner(env)?,
        allowed_asset: read_allowed_asset(env)?,
        paused: read_paused(env),
        interest_rate_bps: read_interest_rate_bps(env),
        liquidation_threshold_bps: read_liquidation_threshold_bps(env),
        reward_multiplier_bps: read_reward_multiplier_bps(env),
        max_seize_fraction_bps: read_max_seize_fraction_bps(env),
    })
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    for key in [
        DataKey::Owner,
        DataKey::AllowedAsset,
        DataKey::Paused,
        DataKey::InterestRateBps,
        DataKey::LiquidationThresholdBps,
        DataKey::RewardMultiplierBps,
        DataKey::MaxSeizeFractionBps,
        DataKey::TotalDeposits,
        DataKey::TotalBorrows,
    ] {
        if persistent.has(&key) {
            persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
        }
    }
    if env.storage().instance().has(&DataKey::Initialized) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

fn bump_account_ttl(env: &Env, key: &DataKey) {
    let persistent = env.storage().persistent();
    if persistent.has(key) {
        persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
