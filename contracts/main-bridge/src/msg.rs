//! Message types for the main bridge contract

use common::{ApprovalReceiveMsg, AuthoritySet, Tally};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{ChangeRequest, DepositRecord, SideTokenRecord, WithdrawRecord};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub main_chain_id: u64,
    /// Main token contract
    pub token: String,
    /// Secondary address allowed to pause and resume
    pub admin: String,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Registration (owner)
    // ========================================================================
    /// One-shot; fixes the counterpart bridge and the authority set
    RegisterSideBridge {
        side_bridge: String,
        required_signatures: u32,
        authorities: Vec<String>,
    },
    /// `side_token_id` must equal the hash of the other fields
    RegisterSideToken {
        side_chain_id: u64,
        name: String,
        symbol: String,
        conversion_rate: Uint128,
        conversion_rate_decimals: u8,
        side_token_id: Binary,
    },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Lock `amount` of the caller's main tokens; requires an allowance
    Deposit {
        side_token_id: Binary,
        amount: Uint128,
    },
    /// `ApproveAndCall` callback from the main token; `data` is the side token id
    ReceiveApproval(ApprovalReceiveMsg),
    /// Deposit the owner's tokens on behalf of `beneficiary`
    OwnerDeposit {
        beneficiary: String,
        side_token_id: Binary,
        amount: Uint128,
    },
    /// Authority confirmation that the deposit was minted on the side chain
    ConfirmDeposit { deposit_id: Binary },

    // ========================================================================
    // Withdrawals
    // ========================================================================
    /// Authority signature releasing a side-chain redeem
    Withdraw {
        redeem_id: Binary,
        side_token_id: Binary,
        owner: String,
        amount_st: Uint128,
        source_tx_hash: Binary,
    },

    // ========================================================================
    // Pause (owner or admin)
    // ========================================================================
    PauseBridge {},
    ResumeBridge {},

    // ========================================================================
    // Staking
    // ========================================================================
    Stake { amount: Uint128 },
    Unstake { amount: Uint128 },

    // ========================================================================
    // Authority Changes
    // ========================================================================
    /// Open to anyone; emits the change id authorities confirm on both bridges
    ChangeAuthorityRequest {
        old_authority: String,
        new_authority: String,
    },
    ChangeAuthority {
        change_id: Binary,
        old_authority: String,
        new_authority: String,
    },

    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(SideTokenRecord)]
    SideToken { side_token_id: Binary },
    /// Compute a side token id without registering anything
    #[returns(HashResponse)]
    HashSideTokenId {
        side_chain_id: u64,
        name: String,
        symbol: String,
        conversion_rate: Uint128,
        conversion_rate_decimals: u8,
    },
    #[returns(DepositResponse)]
    Deposit { deposit_id: Binary },
    #[returns(WithdrawResponse)]
    Withdraw { redeem_id: Binary },
    #[returns(StakedAmountResponse)]
    StakedAmount { staker: String },
    #[returns(AuthoritiesResponse)]
    Authorities {},
    #[returns(IsAuthorityResponse)]
    IsAuthority { address: String },
    #[returns(ChangeRequestResponse)]
    ChangeRequest { change_id: Binary },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub admin: Addr,
    pub main_chain_id: u64,
    pub token: Addr,
    pub paused: bool,
    pub side_bridge: Option<Addr>,
    pub total_locked: Uint128,
}

#[cw_serde]
pub struct HashResponse {
    pub hash: Binary,
    /// `0x`-prefixed hex of `hash`
    pub hex: String,
}

#[cw_serde]
pub struct DepositResponse {
    pub deposit: DepositRecord,
    pub confirmations: Tally,
}

#[cw_serde]
pub struct WithdrawResponse {
    /// Payload fixed by the first signer, if any
    pub withdraw: Option<WithdrawRecord>,
    pub signed_count: u32,
    pub withdrawn: bool,
}

#[cw_serde]
pub struct StakedAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct AuthoritiesResponse {
    /// `None` until the side bridge is registered
    pub authorities: Option<AuthoritySet>,
}

#[cw_serde]
pub struct IsAuthorityResponse {
    pub is_authority: bool,
}

#[cw_serde]
pub struct ChangeRequestResponse {
    pub request: ChangeRequest,
    pub signed_count: u32,
}
