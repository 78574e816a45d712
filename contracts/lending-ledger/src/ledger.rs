//! Per-account deposit and borrow records.
//!
//! Each operation is split in two: `plan_*` validates and computes the post
//! state without writing, `commit_*` writes it. The contract moves funds
//! between the two, so a failed transfer never leaves a partial update.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::helpers::require_positive;
use crate::math::{add, subtract};
use crate::risk::is_borrow_admissible;
use crate::storage::*;

pub struct DepositUpdate {
    pub account_deposit: u128,
    pub total_deposits: u128,
}

pub struct BorrowUpdate {
    pub record: BorrowRecord,
    pub total_borrows: u128,
}

pub fn plan_deposit(env: &Env, account: &Address, amount: u128) -> Result<DepositUpdate, Error> {
    require_positive(amount)?;
    Ok(DepositUpdate {
        account_deposit: add(read_deposit(env, account), amount)?,
        total_deposits: add(read_total_deposits(env), amount)?,
    })
}

pub fn commit_deposit(env: &Env, account: &Address, update: &DepositUpdate) {
    write_deposit(env, account, update.account_deposit);
    write_total_deposits(env, update.total_deposits);
}

/// Re-snapshots collateral from the current deposit on every call.
pub fn plan_borrow(env: &Env, account: &Address, amount: u128) -> Result<BorrowUpdate, Error> {
    require_positive(amount)?;
    let collateral = read_deposit(env, account);
    let current = read_borrow(env, account).unwrap_or_default();
    let new_debt = add(current.debt_amount, amount)?;
    if !is_borrow_admissible(collateral, new_debt)? {
        return Err(Error::InsufficientCollateral);
    }
    Ok(BorrowUpdate {
        record: BorrowRecord {
            debt_amount: new_debt,
            collateral_snapshot: collateral,
        },
        total_borrows: add(read_total_borrows(env), amount)?,
    })
}

/// Debt drops by exactly `amount`; the collateral snapshot is untouched.
pub fn plan_repay(env: &Env, account: &Address, amount: u128) -> Result<BorrowUpdate, Error> {
    require_positive(amount)?;
    let current = read_borrow(env, account).unwrap_or_default();
    if amount > current.debt_amount {
        return Err(Error::InvalidAmount);
    }
    Ok(BorrowUpdate {
        record: BorrowRecord {
            debt_amount: subtract(current.debt_amount, amount),
            collateral_snapshot: current.collateral_snapshot,
        },
        total_borrows: subtract(read_total_borrows(env), amount),
    })
}

pub fn commit_borrow(env: &Env, account: &Address, update: &BorrowUpdate) {
    write_borrow(env, account, &update.record);
    write_total_borrows(env, update.total_borrows);
}
