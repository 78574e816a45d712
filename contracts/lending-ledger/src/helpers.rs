use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::storage::*;

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    bump_core_ttl(env);
    Ok(())
}

/// Gate shared by every mutating ledger operation: initialized, not paused,
/// and operating on the configured asset.
pub fn require_active(env: &Env, asset: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    if read_paused(env) {
        return Err(Error::ProtocolPaused);
    }
    if read_allowed_asset(env)? != *asset {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    if read_owner(env)? != *caller {
        return Err(Error::NotAuthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_positive(amount: u128) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn require_in_band(value: u32, min: u32, max: u32) -> Result<(), Error> {
    if value < min || value > max {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

pub fn to_i128(amount: u128) -> Result<i128, Error> {
    if amount > i128::MAX as u128 {
        return Err(Error::ArithmeticOverflow);
    }
    Ok(amount as i128)
}

/// Moves `amount` of `asset` between `from` and `to`. A rejected transfer
/// (insufficient funds, missing authorization, host failure) maps to
/// `InsufficientBalance` and leaves ledger state untouched.
pub fn transfer_asset(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), Error> {
    let amount = to_i128(amount)?;
    let client = token::Client::new(env, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) | Err(_) => Err(Error::InsufficientBalance),
    }
}

pub fn transfer_to_custody(env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<(), Error> {
    transfer_asset(env, asset, from, &env.current_contract_address(), amount)
}

pub fn transfer_from_custody(env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), Error> {
    transfer_asset(env, asset, &env.current_contract_address(), to, amount)
}
