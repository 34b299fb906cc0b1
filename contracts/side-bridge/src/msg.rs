//! Message types for the side bridge contract

use common::{AuthoritySet, SideTokenHookMsg, Tally};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{DepositRecord, RedeemRecord, SideTokenRecord, VestInfo};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub main_chain_id: u64,
    /// Main bridge address on the main chain
    pub main_bridge: String,
    pub side_chain_id: u64,
    pub required_signatures: u32,
    pub authorities: Vec<String>,
    pub vesting_contract: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Registration (owner / operators)
    // ========================================================================
    /// Name and symbol are read from the token; `side_token_id` must match
    RegisterSideToken {
        side_token_id: Binary,
        side_token: String,
        conversion_rate: Uint128,
        conversion_rate_decimals: u8,
    },
    /// Enable minting for a registered token
    AcknowledgeSideToken { side_token_id: Binary },
    AddOperator { operator: String },
    RemoveOperator { operator: String },
    SetVestingContract { vesting_contract: String },

    // ========================================================================
    // Authority Quorums
    // ========================================================================
    /// Replay of a main-chain deposit; the vote reaching the threshold mints
    Deposit {
        side_token_id: Binary,
        deposit_id: Binary,
        deposit_count: u64,
        beneficiary: String,
        amount_mt: Uint128,
        amount_st: Uint128,
        source_tx_hash: Binary,
    },
    /// Burn a redeem's held tokens once the main-chain withdrawal went through
    ConfirmRedeem { redeem_id: Binary },
    PauseBridge { tx_hash: Binary },
    ResumeBridge { tx_hash: Binary },
    ChangeAuthority {
        change_id: Binary,
        old_authority: String,
        new_authority: String,
    },

    // ========================================================================
    // Side Token Callbacks
    // ========================================================================
    /// Accepted only from a registered side token
    TokenHook(SideTokenHookMsg),

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
    #[returns(RedeemResponse)]
    Redeem { redeem_id: Binary },
    #[returns(StakedAmountResponse)]
    StakedAmount {
        side_token_id: Binary,
        staker: String,
    },
    #[returns(VestCountResponse)]
    VestCount { owner: String },
    #[returns(VestInfo)]
    VestInfo { owner: String, index: u64 },
    #[returns(AuthoritySet)]
    Authorities {},
    #[returns(IsAuthorityResponse)]
    IsAuthority { address: String },
    #[returns(OperatorsResponse)]
    Operators {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub main_chain_id: u64,
    pub main_bridge: String,
    pub side_chain_id: u64,
    pub vesting_contract: Option<Addr>,
    pub paused: bool,
}

#[cw_serde]
pub struct HashResponse {
    pub hash: Binary,
    /// `0x`-prefixed hex of `hash`
    pub hex: String,
}

#[cw_serde]
pub struct DepositResponse {
    /// Payload fixed by the first signer, if any
    pub deposit: Option<DepositRecord>,
    pub signed_count: u32,
    pub minted: bool,
}

#[cw_serde]
pub struct RedeemResponse {
    pub redeem: RedeemRecord,
    pub confirmations: Tally,
}

#[cw_serde]
pub struct StakedAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct VestCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct IsAuthorityResponse {
    pub is_authority: bool,
}

#[cw_serde]
pub struct OperatorsResponse {
    pub operators: Vec<Addr>,
}
