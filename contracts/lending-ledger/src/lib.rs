#![no_std]

#[cfg(test)]
extern crate std;

mod constants;
mod contract;
mod errors;
mod events;
mod helpers;
mod ledger;
mod liquidation;
mod math;
mod rewards;
mod risk;
mod storage;

pub use contract::*;
pub use errors::Error;
pub use storage::{BorrowRecord, ProtocolConfig, ProtocolStats};
