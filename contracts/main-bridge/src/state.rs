//! State definitions for the main bridge contract

use common::{AuthoritySet, ConversionRate, Quorum};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:main-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// May pause and resume alongside the owner
    pub admin: Addr,
    pub main_chain_id: u64,
    /// Main token locked by deposits and released by withdrawals
    pub token: Addr,
    pub paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Counterpart bridge and the authorities that relay between the two
#[cw_serde]
pub struct SideBridgeConfig {
    pub side_bridge: Addr,
    pub authorities: AuthoritySet,
}

pub const SIDE_BRIDGE: Item<SideBridgeConfig> = Item::new("side_bridge");

/// Main tokens held for deposits and not yet withdrawn
pub const TOTAL_LOCKED: Item<Uint128> = Item::new("total_locked");

// ============================================================================
// Side Tokens
// ============================================================================

#[cw_serde]
pub struct SideTokenRecord {
    pub side_token_id: Binary,
    pub side_chain_id: u64,
    pub name: String,
    pub symbol: String,
    pub conversion: ConversionRate,
    /// Deposits made against this pairing so far
    pub deposit_count: u64,
}

/// side_token_id => record
pub const SIDE_TOKENS: Map<&[u8], SideTokenRecord> = Map::new("side_tokens");

// ============================================================================
// Deposits
// ============================================================================

#[cw_serde]
pub enum DepositStatus {
    /// No authority has confirmed yet
    Initiated,
    /// Some, but fewer than the required, authorities have confirmed
    AwaitingConfirmation,
    Confirmed,
}

#[cw_serde]
pub struct DepositRecord {
    pub deposit_id: Binary,
    pub side_token_id: Binary,
    pub deposit_count: u64,
    /// Account the main tokens were pulled from
    pub depositor: Addr,
    /// Side-chain recipient of the minted side tokens
    pub beneficiary: String,
    pub amount_mt: Uint128,
    pub amount_st: Uint128,
    pub status: DepositStatus,
}

/// deposit_id => record
pub const DEPOSITS: Map<&[u8], DepositRecord> = Map::new("deposits");

pub const DEPOSIT_CONFIRMATIONS: Quorum = Quorum::new("confirm_deposit");

// ============================================================================
// Withdrawals
// ============================================================================

/// Payload fixed by the first authority to sign a withdrawal.
#[cw_serde]
pub struct WithdrawRecord {
    pub redeem_id: Binary,
    pub side_token_id: Binary,
    pub owner: Addr,
    pub amount_st: Uint128,
    pub amount_mt: Uint128,
    pub source_tx_hash: Binary,
    pub withdrawn: bool,
}

/// redeem_id => record
pub const WITHDRAWS: Map<&[u8], WithdrawRecord> = Map::new("withdraws");

pub const WITHDRAW_SIGNATURES: Quorum = Quorum::new("withdraw");

// ============================================================================
// Staking
// ============================================================================

/// staker => staked amount
pub const STAKES: Map<&Addr, Uint128> = Map::new("stakes");

// ============================================================================
// Authority Changes
// ============================================================================

#[cw_serde]
pub struct ChangeRequest {
    pub change_id: Binary,
    pub old_authority: Addr,
    pub new_authority: Addr,
    pub nonce: u64,
    pub executed: bool,
}

/// change_id => request
pub const CHANGE_REQUESTS: Map<&[u8], ChangeRequest> = Map::new("change_requests");

/// Number of requests filed, used as the next request's nonce
pub const CHANGE_NONCE: Item<u64> = Item::new("change_nonce");

pub const CHANGE_SIGNATURES: Quorum = Quorum::new("change_authority");
