use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::math::add;
use crate::storage::{read_reward, write_reward};

/// Accrued balance after crediting `reward`, without writing it.
pub fn plan_credit(env: &Env, liquidator: &Address, reward: u128) -> Result<u128, Error> {
    add(read_reward(env, liquidator), reward)
}

pub fn commit_credit(env: &Env, liquidator: &Address, accrued: u128) {
    write_reward(env, liquidator, accrued);
}

pub fn claimable(env: &Env, liquidator: &Address) -> Result<u128, Error> {
    let accrued = read_reward(env, liquidator);
    if accrued == 0 {
        return Err(Error::InsufficientBalance);
    }
    Ok(accrued)
}

// Record is zeroed, never removed.
pub fn commit_claim(env: &Env, liquidator: &Address) {
    write_reward(env, liquidator, 0u128);
}
