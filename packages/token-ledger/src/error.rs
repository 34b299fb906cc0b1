use cosmwasm_std::{Int128, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Int128, required: Uint128 },

    #[error("Insufficient allowance: allowance {allowance}, required {required}")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Max supply exceeded: max supply is {max_supply}")]
    MaxSupplyExceeded { max_supply: Uint128 },

    #[error("Initial supply {initial_supply} exceeds max supply {max_supply}")]
    InitialSupplyExceedsMax {
        initial_supply: Uint128,
        max_supply: Uint128,
    },

    #[error("Burn of {amount} exceeds total supply {total_supply}")]
    BurnExceedsSupply {
        total_supply: Uint128,
        amount: Uint128,
    },

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },

    #[error("Balance overflow")]
    Overflow,
}
