//! Error types for the side token contract

use cosmwasm_std::{Int128, StdError, Uint128};
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

    #[error("Unauthorized: only the side bridge can mint")]
    NotBridge,

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Insufficient funds for transfer with fee: balance {balance}, required {required}")]
    InsufficientFundsWithFee { balance: Int128, required: Uint128 },
}
