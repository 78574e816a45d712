//! Liquidation of under-collateralized positions.
//!
//! A liquidator repays part of a target's debt and earns a reward carved out
//! of the target's collateral snapshot. The reward is
//! `min(repay * multiplier, collateral * max_seize_fraction)`, both factors in
//! basis points and owner-configurable.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::helpers::require_positive;
use crate::math::{bps_of, subtract};
use crate::rewards;
use crate::risk::is_liquidatable;
use crate::storage::*;

pub struct LiquidationPlan {
    pub reward: u128,
    pub target_record: BorrowRecord,
    pub total_borrows: u128,
    pub liquidator_accrued: u128,
}

pub fn calculate_reward(
    repay_amount: u128,
    collateral_available: u128,
    reward_multiplier_bps: u32,
    max_seize_fraction_bps: u32,
) -> Result<u128, Error> {
    let bonus_cap = bps_of(repay_amount, reward_multiplier_bps as u128)?;
    let seize_cap = bps_of(collateral_available, max_seize_fraction_bps as u128)?;
    Ok(bonus_cap.min(seize_cap))
}

/// Reward for repaying `repay_amount` of `target`'s debt under the current
/// configuration. Fails exactly when `liquidate` would fail its checks.
pub fn preview_reward(env: &Env, target: &Address, repay_amount: u128) -> Result<u128, Error> {
    let record = eligible_record(env, target, repay_amount)?;
    calculate_reward(
        repay_amount,
        record.collateral_snapshot,
        read_reward_multiplier_bps(env),
        read_max_seize_fraction_bps(env),
    )
}

pub fn plan_liquidation(
    env: &Env,
    liquidator: &Address,
    target: &Address,
    repay_amount: u128,
) -> Result<LiquidationPlan, Error> {
    let record = eligible_record(env, target, repay_amount)?;
    let reward = calculate_reward(
        repay_amount,
        record.collateral_snapshot,
        read_reward_multiplier_bps(env),
        read_max_seize_fraction_bps(env),
    )?;
    Ok(LiquidationPlan {
        reward,
        target_record: BorrowRecord {
            debt_amount: subtract(record.debt_amount, repay_amount),
            collateral_snapshot: subtract(record.collateral_snapshot, reward),
        },
        total_borrows: subtract(read_total_borrows(env), repay_amount),
        liquidator_accrued: rewards::plan_credit(env, liquidator, reward)?,
    })
}

pub fn commit_liquidation(env: &Env, liquidator: &Address, target: &Address, plan: &LiquidationPlan) {
    rewards::commit_credit(env, liquidator, plan.liquidator_accrued);
    write_borrow(env, target, &plan.target_record);
    write_total_borrows(env, plan.total_borrows);
}

fn eligible_record(env: &Env, target: &Address, repay_amount: u128) -> Result<BorrowRecord, Error> {
    require_positive(repay_amount)?;
    let record = read_borrow(env, target).unwrap_or_default();
    let threshold = read_liquidation_threshold_bps(env);
    if !is_liquidatable(record.collateral_snapshot, record.debt_amount, threshold)? {
        return Err(Error::LiquidationNotEligible);
    }
    if repay_amount > record.debt_amount {
        return Err(Error::InvalidAmount);
    }
    Ok(record)
}
