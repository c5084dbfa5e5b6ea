use alloy::primitives::{address, Address};

pub const DAY: u64 = 24 * 60 * 60;
pub const ETHER: u128 = 1_000_000_000_000_000_000;

pub const DEFAULT_NFT_ADDRESS: Address = address!("0x4aB8a4e7B2fAbbDcaA8398A3829718DeAC831196");
pub const DEFAULT_MARKETPLACE_ADDRESS: Address =
    address!("0xFec9DfE525ec5a2214AD5a223AA6E484953E2D70");

pub const DEFAULT_START_ID: u64 = 2;
pub const DEFAULT_END_ID: u64 = 243;

pub const MIN_DURATION_SECS: u64 = 3 * DAY;
pub const MAX_DURATION_SECS: u64 = 15 * DAY;
pub const DURATION_STEP_SECS: u64 = DAY / 2;

/// 0.1 ether per day, in wei per second (truncated).
pub const MIN_PRICE_PER_SECOND: u128 = ETHER / 10 / DAY as u128;
/// 5 ether per day, in wei per second (truncated).
pub const MAX_PRICE_PER_SECOND: u128 = 5 * ETHER / DAY as u128;
/// 0.2 ether per day, in wei per second (truncated).
pub const PRICE_STEP_PER_SECOND: u128 = ETHER / 5 / DAY as u128;
