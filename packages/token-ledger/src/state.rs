use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Int128, Uint128};
use cw_storage_plus::{Item, Map};

/// Whether burn and recovery may drive a holder's balance below zero.
#[cw_serde]
#[derive(Copy, Default)]
pub enum BalancePolicy {
    #[default]
    Strict,
    AllowNegative,
}

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Sum of all balances
    pub total_supply: Uint128,
    /// Hard cap on total supply, if any
    pub max_supply: Option<Uint128>,
    pub policy: BalancePolicy,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// holder => signed balance
pub const BALANCES: Map<&Addr, Int128> = Map::new("balance");

/// (owner, spender) => allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowance");
