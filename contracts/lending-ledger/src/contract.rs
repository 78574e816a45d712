use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::constants::*;
use crate::errors::Error;
use crate::events::*;
use crate::helpers::*;
use crate::storage::*;
use crate::{ledger, liquidation, rewards, risk};

#[contract]
pub struct LendingLedger;

#[contractimpl]
impl LendingLedger {
    /// One-shot setup: owner, the single accepted asset, and the risk
    /// parameters. Rates and thresholds are in basis points.
    pub fn initialize(
        env: Env,
        owner: Address,
        allowed_asset: Address,
        interest_rate_bps: u32,
        liquidation_threshold_bps: u32,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        require_in_band(interest_rate_bps, MIN_INTEREST_RATE_BPS, MAX_INTEREST_RATE_BPS)?;
        require_in_band(
            liquidation_threshold_bps,
            MIN_LIQUIDATION_THRESHOLD_BPS,
            MAX_LIQUIDATION_THRESHOLD_BPS,
        )?;
        write_owner(&env, &owner);
        write_allowed_asset(&env, &allowed_asset);
        write_paused(&env, false);
        write_interest_rate_bps(&env, interest_rate_bps);
        write_liquidation_threshold_bps(&env, liquidation_threshold_bps);
        write_liquidation_reward(
            &env,
            DEFAULT_REWARD_MULTIPLIER_BPS,
            DEFAULT_MAX_SEIZE_FRACTION_BPS,
        );
        write_total_deposits(&env, 0u128);
        write_total_borrows(&env, 0u128);
        mark_initialized(&env);
        bump_core_ttl(&env);
        Ok(())
    }

    /// Deposit collateral into custody.
    pub fn deposit(env: Env, user: Address, asset: Address, amount: u128) -> Result<(), Error> {
        require_active(&env, &asset)?;
        user.require_auth();
        let update = ledger::plan_deposit(&env, &user, amount)?;
        transfer_to_custody(&env, &asset, &user, amount)?;
        ledger::commit_deposit(&env, &user, &update);

        Deposit {
            depositor: user,
            amount,
            account_deposit: update.account_deposit,
            total_deposits: update.total_deposits,
        }
        .publish(&env);
        Ok(())
    }

    /// Borrow against the caller's deposit. The deposit at this moment becomes
    /// the position's collateral snapshot.
    pub fn borrow(env: Env, user: Address, asset: Address, amount: u128) -> Result<(), Error> {
        require_active(&env, &asset)?;
        user.require_auth();
        let update = ledger::plan_borrow(&env, &user, amount)?;
        transfer_from_custody(&env, &asset, &user, amount)?;
        ledger::commit_borrow(&env, &user, &update);

        Borrow {
            borrower: user,
            borrow_amount: amount,
            account_debt: update.record.debt_amount,
            collateral_snapshot: update.record.collateral_snapshot,
            total_borrows: update.total_borrows,
        }
        .publish(&env);
        Ok(())
    }

    pub fn repay(env: Env, user: Address, asset: Address, amount: u128) -> Result<(), Error> {
        require_active(&env, &asset)?;
        user.require_auth();
        let update = ledger::plan_repay(&env, &user, amount)?;
        transfer_to_custody(&env, &asset, &user, amount)?;
        ledger::commit_borrow(&env, &user, &update);

        RepayBorrow {
            borrower: user,
            repay_amount: amount,
            account_debt: update.record.debt_amount,
            total_borrows: update.total_borrows,
        }
        .publish(&env);
        Ok(())
    }

    /// Repay part of `target`'s debt and accrue a reward from its collateral
    /// snapshot. Returns the reward credited to `liquidator`.
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        target: Address,
        asset: Address,
        repay_amount: u128,
    ) -> Result<u128, Error> {
        require_active(&env, &asset)?;
        liquidator.require_auth();
        let plan = liquidation::plan_liquidation(&env, &liquidator, &target, repay_amount)?;
        transfer_to_custody(&env, &asset, &liquidator, repay_amount)?;
        liquidation::commit_liquidation(&env, &liquidator, &target, &plan);

        LiquidateBorrow {
            liquidator,
            borrower: target,
            repay_amount,
            reward: plan.reward,
            account_debt: plan.target_record.debt_amount,
            collateral_snapshot: plan.target_record.collateral_snapshot,
        }
        .publish(&env);
        Ok(plan.reward)
    }

    /// Pay out the full accrued reward. The record is zeroed only after the
    /// transfer succeeds.
    pub fn claim_rewards(env: Env, liquidator: Address, asset: Address) -> Result<u128, Error> {
        require_active(&env, &asset)?;
        liquidator.require_auth();
        let amount = rewards::claimable(&env, &liquidator)?;
        transfer_from_custody(&env, &asset, &liquidator, amount)?;
        rewards::commit_claim(&env, &liquidator);

        RewardsClaimed { liquidator, amount }.publish(&env);
        Ok(amount)
    }

    // Owner-gated parameters

    pub fn set_interest_rate(env: Env, caller: Address, interest_rate_bps: u32) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        require_in_band(interest_rate_bps, MIN_INTEREST_RATE_BPS, MAX_INTEREST_RATE_BPS)?;
        write_interest_rate_bps(&env, interest_rate_bps);
        InterestRateUpdated { interest_rate_bps }.publish(&env);
        Ok(())
    }

    pub fn set_liquidation_threshold(
        env: Env,
        caller: Address,
        liquidation_threshold_bps: u32,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        require_in_band(
            liquidation_threshold_bps,
            MIN_LIQUIDATION_THRESHOLD_BPS,
            MAX_LIQUIDATION_THRESHOLD_BPS,
        )?;
        write_liquidation_threshold_bps(&env, liquidation_threshold_bps);
        LiquidationThresholdUpdated {
            liquidation_threshold_bps,
        }
        .publish(&env);
        Ok(())
    }

    pub fn set_liquidation_reward(
        env: Env,
        caller: Address,
        reward_multiplier_bps: u32,
        max_seize_fraction_bps: u32,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        require_in_band(
            reward_multiplier_bps,
            MIN_REWARD_MULTIPLIER_BPS,
            MAX_REWARD_MULTIPLIER_BPS,
        )?;
        require_in_band(max_seize_fraction_bps, 1, MAX_SEIZE_FRACTION_BPS)?;
        write_liquidation_reward(&env, reward_multiplier_bps, max_seize_fraction_bps);
        LiquidationRewardUpdated {
            reward_multiplier_bps,
            max_seize_fraction_bps,
        }
        .publish(&env);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_paused(&env, caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_paused(&env, caller, false)
    }

    // Reads

    pub fn get_deposit(env: Env, account: Address) -> u128 {
        read_deposit(&env, &account)
    }

    pub fn get_borrow(env: Env, account: Address) -> Option<BorrowRecord> {
        read_borrow(&env, &account)
    }

    pub fn get_reward(env: Env, account: Address) -> u128 {
        read_reward(&env, &account)
    }

    pub fn get_protocol_stats(env: Env) -> Result<ProtocolStats, Error> {
        require_initialized(&env)?;
        Ok(protocol_stats(&env))
    }

    pub fn get_config(env: Env) -> Result<ProtocolConfig, Error> {
        require_initialized(&env)?;
        protocol_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        read_paused(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    pub fn get_allowed_asset(env: Env) -> Result<Address, Error> {
        read_allowed_asset(&env)
    }

    /// Snapshot collateral to debt in basis points; `None` without debt.
    pub fn get_collateral_ratio(env: Env, account: Address) -> Result<Option<u128>, Error> {
        require_initialized(&env)?;
        let record = read_borrow(&env, &account).unwrap_or_default();
        risk::collateral_ratio_bps(record.collateral_snapshot, record.debt_amount)
    }

    pub fn can_liquidate(env: Env, account: Address) -> Result<bool, Error> {
        require_initialized(&env)?;
        let record = read_borrow(&env, &account).unwrap_or_default();
        risk::is_liquidatable(
            record.collateral_snapshot,
            record.debt_amount,
            read_liquidation_threshold_bps(&env),
        )
    }

    pub fn preview_liquidation_reward(env: Env, target: Address, repay_amount: u128) -> Result<u128, Error> {
        require_initialized(&env)?;
        liquidation::preview_reward(&env, &target, repay_amount)
    }
}

impl LendingLedger {
    fn set_paused(env: &Env, caller: Address, paused: bool) -> Result<(), Error> {
        require_owner(env, &caller)?;
        write_paused(env, paused);
        PauseUpdated {
            owner: caller,
            paused,
        }
        .publish(env);
        Ok(())
    }
}
