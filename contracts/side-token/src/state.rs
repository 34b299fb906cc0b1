//! State definitions for the side token contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:side-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Sole minter and receiver of redeem, stake and vest hooks
    pub side_bridge: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
