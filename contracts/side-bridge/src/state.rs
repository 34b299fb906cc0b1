//! State definitions for the side bridge contract

use common::{AuthoritySet, ConversionRate, Quorum};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:side-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub main_chain_id: u64,
    /// Counterpart bridge on the main chain; not an address on this chain
    pub main_bridge: String,
    pub side_chain_id: u64,
    /// Receives side tokens routed through `Vest`
    pub vesting_contract: Option<Addr>,
    pub paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const AUTHORITIES: Item<AuthoritySet> = Item::new("authorities");

/// operator => enabled
pub const OPERATORS: Map<&Addr, bool> = Map::new("operators");

// ============================================================================
// Side Tokens
// ============================================================================

#[cw_serde]
pub struct SideTokenRecord {
    pub side_token_id: Binary,
    pub side_token: Addr,
    pub name: String,
    pub symbol: String,
    pub conversion: ConversionRate,
    /// Deposits cannot mint until the token is acknowledged
    pub acknowledged: bool,
    /// Redeems made against this token so far
    pub redeem_count: u64,
}

/// side_token_id => record
pub const SIDE_TOKENS: Map<&[u8], SideTokenRecord> = Map::new("side_tokens");

/// side token contract => side_token_id
pub const SIDE_TOKEN_IDS: Map<&Addr, Binary> = Map::new("side_token_ids");

// ============================================================================
// Deposits
// ============================================================================

/// Main-chain deposit as replayed by the first signing authority.
#[cw_serde]
pub struct DepositRecord {
    pub deposit_id: Binary,
    pub side_token_id: Binary,
    pub deposit_count: u64,
    pub beneficiary: Addr,
    pub amount_mt: Uint128,
    pub amount_st: Uint128,
    pub source_tx_hash: Binary,
    pub minted: bool,
}

/// deposit_id => record
pub const DEPOSITS: Map<&[u8], DepositRecord> = Map::new("deposits");

pub const DEPOSIT_SIGNATURES: Quorum = Quorum::new("deposit");

// ============================================================================
// Redeems
// ============================================================================

#[cw_serde]
pub enum RedeemStatus {
    /// Tokens held by the bridge, withdrawal pending on the main chain
    Requested,
    /// Burned after the main-chain withdrawal was confirmed
    Confirmed,
}

#[cw_serde]
pub struct RedeemRecord {
    pub redeem_id: Binary,
    pub side_token_id: Binary,
    pub redeem_count: u64,
    pub owner: Addr,
    pub amount_st: Uint128,
    pub amount_mt: Uint128,
    pub status: RedeemStatus,
}

/// redeem_id => record
pub const REDEEMS: Map<&[u8], RedeemRecord> = Map::new("redeems");

pub const REDEEM_CONFIRMATIONS: Quorum = Quorum::new("confirm_redeem");

// ============================================================================
// Staking & Vesting
// ============================================================================

/// (side_token_id, staker) => staked amount
pub const STAKES: Map<(&[u8], &Addr), Uint128> = Map::new("stakes");

#[cw_serde]
pub struct VestInfo {
    pub side_token_id: Binary,
    pub vesting_contract: Addr,
    /// Grant id assigned by the vesting contract
    pub grant_id: u64,
    pub amount: Uint128,
    pub cliff_in_days: u64,
    pub duration_in_days: u64,
    pub interval_in_days: u64,
    pub created_at: u64,
}

/// owner => number of grants created through the bridge
pub const VEST_COUNTS: Map<&Addr, u64> = Map::new("vest_counts");

/// (owner, index) => grant
pub const VESTS: Map<(&Addr, u64), VestInfo> = Map::new("vests");

// ============================================================================
// Pause & Authority Changes
// ============================================================================

/// Keyed by the tx hash the authorities cite
pub const PAUSE_VOTES: Quorum = Quorum::new("pause");
pub const RESUME_VOTES: Quorum = Quorum::new("resume");

/// Substitution fixed by the first authority to vote on a change id.
#[cw_serde]
pub struct ChangeRequest {
    pub change_id: Binary,
    pub old_authority: Addr,
    pub new_authority: Addr,
    pub executed: bool,
}

/// change_id => request
pub const CHANGE_REQUESTS: Map<&[u8], ChangeRequest> = Map::new("change_requests");

pub const CHANGE_SIGNATURES: Quorum = Quorum::new("change_authority");
