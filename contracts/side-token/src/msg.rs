//! Message types for the side token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::TokenInfoResponse;
use token_ledger::msg::{AllowanceResponse, BalanceResponse};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub side_bridge: String,
}

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
    /// Pay `amount` to `recipient` and `fee` to `fee_collector` atomically
    TransferWithFee {
        recipient: String,
        amount: Uint128,
        fee_collector: String,
        fee: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    Approve {
        spender: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
    },
    Burn {
        amount: Uint128,
    },

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Side bridge only
    Mint {
        recipient: String,
        amount: Uint128,
    },
    /// Hand `amount` to the bridge for withdrawal on the main chain
    Redeem {
        amount: Uint128,
    },
    Stake {
        amount: Uint128,
    },
    /// Ask the bridge to return staked tokens
    Unstake {
        amount: Uint128,
    },
    /// Hand `amount` to the bridge to fund a vesting grant for the caller
    Vest {
        amount: Uint128,
        cliff_in_days: u64,
        duration_in_days: u64,
        interval_in_days: u64,
    },

    TransferOwnership {
        new_owner: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(BridgeResponse)]
    Bridge {},
}

#[cw_serde]
pub struct BridgeResponse {
    pub side_bridge: Addr,
    pub owner: Addr,
}
