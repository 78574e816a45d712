use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    InvalidAmount = 2,
    InsufficientCollateral = 3,
    LiquidationNotEligible = 4,
    InsufficientBalance = 5,
    ArithmeticOverflow = 6,
    ProtocolPaused = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    InvalidParameter = 10,
}
