//! Error types for the main token contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;
use token_ledger::LedgerError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Pause & Lock Errors
    // ========================================================================

    #[error("Token is paused")]
    TokenPaused,

    #[error("Token is not paused")]
    TokenNotPaused,

    #[error("Account is locked: {address}")]
    AccountLocked { address: String },

    #[error("Account already locked: {address}")]
    AccountAlreadyLocked { address: String },

    #[error("Account not locked: {address}")]
    AccountNotLocked { address: String },

    #[error("Account locks are not supported under the negative balance policy")]
    LockUnsupported,

    #[error("Max supply is not supported under the negative balance policy")]
    MaxSupplyUnsupported,

    // ========================================================================
    // Minting Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Minting is disabled: linear mint is registered")]
    MintDisabled,

    #[error("Linear mint already registered")]
    LinearMintAlreadyRegistered,

    #[error("Linear mint not registered")]
    LinearMintNotRegistered,

    #[error("Linear mint finished")]
    LinearMintFinished,

    #[error("Nothing to mint until the next period ends")]
    NothingToMint,

    #[error("Linear mint supply {minting_supply} exceeds remaining capacity {remaining}")]
    LinearMintExceedsMaxSupply {
        minting_supply: Uint128,
        remaining: Uint128,
    },
}
