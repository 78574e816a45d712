//! Collateralization predicates.
//!
//! Both checks are pure functions of a position's collateral snapshot and
//! debt. They never consult the live deposit balance.

use crate::constants::MIN_BORROW_RATIO_BPS;
use crate::errors::Error;
use crate::math::ratio_bps;

/// Collateral to debt in basis points, `None` when there is no debt.
pub fn collateral_ratio_bps(collateral: u128, debt: u128) -> Result<Option<u128>, Error> {
    if debt == 0 {
        return Ok(None);
    }
    Ok(Some(ratio_bps(collateral, debt)?))
}

/// True when `collateral` covers at least 150% of `total_debt_after_borrow`.
/// A zero debt carries no ratio constraint.
pub fn is_borrow_admissible(collateral: u128, total_debt_after_borrow: u128) -> Result<bool, Error> {
    match collateral_ratio_bps(collateral, total_debt_after_borrow)? {
        None => Ok(true),
        Some(ratio) => Ok(ratio >= MIN_BORROW_RATIO_BPS),
    }
}

/// True when the position carries debt and its ratio is at or below
/// `threshold_bps`.
pub fn is_liquidatable(collateral: u128, debt: u128, threshold_bps: u32) -> Result<bool, Error> {
    match collateral_ratio_bps(collateral, debt)? {
        None => Ok(false),
        Some(ratio) => Ok(ratio <= threshold_bps as u128),
    }
}
