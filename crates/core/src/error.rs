use alloy::{
    contract,
    primitives::{TxHash, U256},
    providers::PendingTransactionError,
    sol_types,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode listing payload")]
    AbiDecode(#[from] sol_types::Error),

    #[error("contract call failed")]
    Contract(#[from] contract::Error),

    #[error("failed to write progress")]
    Io(#[from] std::io::Error),

    #[error("failed to find pending tx")]
    PendingTx(#[from] PendingTransactionError),

    #[error("listing for token {token_id} reverted (tx {tx_hash})")]
    ListingReverted { token_id: U256, tx_hash: TxHash },

    #[error("invalid step range")]
    StepRange(#[from] StepRangeError),

    #[error("invalid token range: start id {0} must not exceed end id {1}")]
    TokenRange(u64, u64),

    #[error("failed to submit listing for token {token_id}: {reason}")]
    Submission { token_id: U256, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepRangeError {
    #[error("step must be greater than zero")]
    ZeroStep,

    #[error("low bound {low} must be less than high bound {high}")]
    EmptyRange { low: U256, high: U256 },

    #[error("range [{low}, {high}) holds no full step of {step}")]
    NoSteps { low: U256, high: U256, step: U256 },

    #[error("range holds more than u64::MAX steps")]
    TooManySteps,
}
