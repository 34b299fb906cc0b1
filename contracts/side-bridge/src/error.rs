//! Error types for the side bridge contract

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

    #[error("Unauthorized: only owner or an operator can perform this action")]
    UnauthorizedOperator,

    #[error("Unauthorized: caller is not an authority")]
    NotAuthority,

    #[error("Unauthorized: the authority being replaced cannot vote on its replacement")]
    ReplacedAuthorityVote,

    #[error("Unauthorized: caller is not a registered side token")]
    NotSideToken,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Bridge is not paused")]
    BridgeNotPaused,

    #[error("Vesting contract not configured")]
    VestingNotConfigured,

    // ========================================================================
    // Side Token Errors
    // ========================================================================

    #[error("Side token already registered: {side_token_id}")]
    SideTokenAlreadyRegistered { side_token_id: String },

    #[error("Side token contract already registered: {address}")]
    SideTokenContractRegistered { address: String },

    #[error("Side token not registered: {side_token_id}")]
    SideTokenNotRegistered { side_token_id: String },

    #[error("Side token not acknowledged: {side_token_id}")]
    SideTokenNotAcknowledged { side_token_id: String },

    #[error("Side token already acknowledged: {side_token_id}")]
    SideTokenAlreadyAcknowledged { side_token_id: String },

    #[error("Side token id mismatch: computed {computed}, supplied {supplied}")]
    SideTokenIdMismatch { computed: String, supplied: String },

    // ========================================================================
    // Amount Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Side amount mismatch: expected {expected}, supplied {supplied}")]
    AmountMismatch { expected: Uint128, supplied: Uint128 },

    #[error("Insufficient stake: staked {staked}, requested {requested}")]
    InsufficientStake { staked: Uint128, requested: Uint128 },

    // ========================================================================
    // Quorum Errors
    // ========================================================================

    #[error("Deposit id mismatch: computed {computed}, supplied {supplied}")]
    DepositIdMismatch { computed: String, supplied: String },

    #[error("Deposit payload does not match the first signature for {deposit_id}")]
    DepositMismatch { deposit_id: String },

    #[error("Redeem not found: {redeem_id}")]
    RedeemNotFound { redeem_id: String },

    #[error("Change request {change_id} does not match the first signature")]
    ChangeRequestMismatch { change_id: String },
}
