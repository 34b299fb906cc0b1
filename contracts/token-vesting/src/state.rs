//! State definitions for the token vesting contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::schedule::VestingSchedule;

pub const CONTRACT_NAME: &str = "crates.io:token-vesting";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Grant {
    pub id: u64,
    /// CW20 contract the grant is paid in
    pub token: Addr,
    /// Account that funded the grant
    pub funder: Addr,
    pub recipient: Addr,
    pub schedule: VestingSchedule,
    /// Cumulative amount paid out, never above `schedule.total_amount`
    pub released: Uint128,
}

/// Number of grants created, also the next grant id
pub const GRANT_COUNT: Item<u64> = Item::new("grant_count");

pub const GRANTS: Map<u64, Grant> = Map::new("grants");

/// (recipient, grant_id) => ()
pub const GRANTS_BY_RECIPIENT: Map<(&Addr, u64), ()> = Map::new("grants_by_recipient");
