//! State definitions for the main token contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use crate::schedule::LinearMintSchedule;

pub const CONTRACT_NAME: &str = "crates.io:main-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Receives the initial supply and all minted tokens
    pub owner: Addr,
    /// Blocks every balance and allowance change while set
    pub paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// account => locked
pub const LOCKED: Map<&Addr, bool> = Map::new("locked");

/// Present once linear minting has been registered
pub const LINEAR_MINT: Item<LinearMintSchedule> = Item::new("linear_mint");
