//! Error types for the token vesting contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid vesting schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("Grant not found: {grant_id}")]
    GrantNotFound { grant_id: u64 },

    #[error("Nothing to release for grant {grant_id}")]
    NothingToRelease { grant_id: u64 },
}
