use soroban_sdk::{contractevent, Address};

/// Emitted when collateral is deposited into custody.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    #[topic]
    pub depositor: Address,
    pub amount: u128,
    pub account_deposit: u128,
    pub total_deposits: u128,
}

/// Emitted on every successful borrow; `collateral_snapshot` is the value
/// frozen into the borrow record.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Borrow {
    #[topic]
    pub borrower: Address,
    pub borrow_amount: u128,
    pub account_debt: u128,
    pub collateral_snapshot: u128,
    pub total_borrows: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepayBorrow {
    #[topic]
    pub borrower: Address,
    pub repay_amount: u128,
    pub account_debt: u128,
    pub total_borrows: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidateBorrow {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub borrower: Address,
    pub repay_amount: u128,
    pub reward: u128,
    pub account_debt: u128,
    pub collateral_snapshot: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimed {
    #[topic]
    pub liquidator: Address,
    pub amount: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestRateUpdated {
    pub interest_rate_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidationThresholdUpdated {
    pub liquidation_threshold_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidationRewardUpdated {
    pub reward_multiplier_bps: u32,
    pub max_seize_fraction_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseUpdated {
    #[topic]
    pub owner: Address,
    pub paused: bool,
}
