//! Message types for the main token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::TokenInfoResponse;
use token_ledger::msg::{AllowanceResponse, BalanceResponse};
use token_ledger::BalancePolicy;

use crate::schedule::LinearMintSchedule;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Credited to the instantiator, who becomes the owner
    pub initial_supply: Uint128,
    /// Supply cap; must be unset under `AllowNegative`
    pub max_supply: Option<Uint128>,
    /// Defaults to `Strict`
    pub balance_policy: Option<BalancePolicy>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers & Allowances
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Transfer to a contract and call its CW20 `Receive` hook
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Set the allowance to exactly `amount`
    Approve {
        spender: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
    },
    /// Approve `spender`, then call its `ReceiveApproval` with `data`
    ApproveAndCall {
        spender: String,
        amount: Uint128,
        data: Binary,
    },
    Burn {
        amount: Uint128,
    },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Mint to the owner. Disabled once linear mint is registered.
    Mint {
        amount: Uint128,
    },
    /// Burn from `owner`, spending the owner-of-token's allowance
    BurnFrom {
        owner: String,
        amount: Uint128,
    },
    /// Forced transfer from `holder` back to the token owner
    Recover {
        holder: String,
        amount: Uint128,
    },
    Pause {},
    Unpause {},
    LockAccount {
        account: String,
    },
    UnlockAccount {
        account: String,
    },
    TransferOwnership {
        new_owner: String,
    },

    // ========================================================================
    // Linear Mint
    // ========================================================================
    RegisterLinearMint {
        minting_supply: Uint128,
        amount_per_period: Uint128,
        period_length_in_days: u64,
    },
    /// Mint whatever the schedule has released since the last call
    LinearMint {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(StatusResponse)]
    Status {},
    #[returns(IsLockedResponse)]
    IsLocked { address: String },
    #[returns(Option<LinearMintSchedule>)]
    LinearMintSchedule {},
    /// Cumulative amount the schedule releases by `at_timestamp` (seconds)
    #[returns(MintAmountResponse)]
    CalculateMintAmount { at_timestamp: u64 },
}

#[cw_serde]
pub struct StatusResponse {
    pub owner: Addr,
    pub paused: bool,
    pub max_supply: Option<Uint128>,
    pub balance_policy: BalancePolicy,
    pub linear_mint_registered: bool,
}

#[cw_serde]
pub struct IsLockedResponse {
    pub locked: bool,
}

#[cw_serde]
pub struct MintAmountResponse {
    pub amount: Uint128,
}
