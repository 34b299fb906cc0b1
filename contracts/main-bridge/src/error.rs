//! Error types for the main bridge contract

use common::{AuthorityError, ConversionError, DescriptorError};
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Authority(#[from] AuthorityError),

    #[error("{0}")]
    Conversion(#[from] ConversionError),

    #[error("{0}")]
    Descriptor(#[from] DescriptorError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only owner or admin can perform this action")]
    UnauthorizedAdmin,

    #[error("Unauthorized: caller is not an authority")]
    NotAuthority,

    #[error("Unauthorized: the authority being replaced cannot vote on its replacement")]
    ReplacedAuthorityVote,

    #[error("Unauthorized: only the main token can call this")]
    NotMainToken,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Bridge is not paused")]
    BridgeNotPaused,

    #[error("Side bridge already registered")]
    SideBridgeAlreadyRegistered,

    #[error("Side bridge not registered")]
    SideBridgeNotRegistered,

    // ========================================================================
    // Side Token Errors
    // ========================================================================

    #[error("Side token already registered: {side_token_id}")]
    SideTokenAlreadyRegistered { side_token_id: String },

    #[error("Side token not registered: {side_token_id}")]
    SideTokenNotRegistered { side_token_id: String },

    #[error("Side token id mismatch: computed {computed}, supplied {supplied}")]
    SideTokenIdMismatch { computed: String, supplied: String },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Insufficient locked balance: locked {locked}, required {required}")]
    InsufficientLocked { locked: Uint128, required: Uint128 },

    #[error("Insufficient stake: staked {staked}, requested {requested}")]
    InsufficientStake { staked: Uint128, requested: Uint128 },

    // ========================================================================
    // Quorum Errors
    // ========================================================================

    #[error("Deposit not found: {deposit_id}")]
    DepositNotFound { deposit_id: String },

    #[error("Withdraw payload does not match the first signature for {redeem_id}")]
    WithdrawMismatch { redeem_id: String },

    #[error("Change request not found: {change_id}")]
    ChangeRequestNotFound { change_id: String },

    #[error("Change request {change_id} does not match the supplied authorities")]
    ChangeRequestMismatch { change_id: String },
}
