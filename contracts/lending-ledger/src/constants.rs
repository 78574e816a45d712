pub const BPS_SCALE: u128 = 10_000u128;
pub const MIN_BORROW_RATIO_BPS: u128 = 15_000u128; // 150% collateral to debt at borrow time

pub const MIN_INTEREST_RATE_BPS: u32 = 100;
pub const MAX_INTEREST_RATE_BPS: u32 = 10_000;
pub const MIN_LIQUIDATION_THRESHOLD_BPS: u32 = 7_000;
pub const MAX_LIQUIDATION_THRESHOLD_BPS: u32 = 9_500;

// Liquidation reward: min(repay * multiplier, collateral * max_seize_fraction)
pub const MIN_REWARD_MULTIPLIER_BPS: u32 = 10_000;
pub const MAX_REWARD_MULTIPLIER_BPS: u32 = 12_000;
pub const DEFAULT_REWARD_MULTIPLIER_BPS: u32 = 10_500;
pub const MAX_SEIZE_FRACTION_BPS: u32 = 10_000;
pub const DEFAULT_MAX_SEIZE_FRACTION_BPS: u32 = 5_000;

pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;
