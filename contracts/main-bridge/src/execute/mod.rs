//! Execute handlers for the main bridge contract.
//!
//! - `registration` - side bridge and side token registration
//! - `deposit` - locking main tokens and deposit confirmation
//! - `withdraw` - quorum-released withdrawals
//! - `stake` - staking ledger
//! - `authority` - two-phase authority substitution
//! - `admin` - pause, resume and ownership

mod admin;
mod authority;
mod deposit;
mod registration;
mod stake;
mod withdraw;

pub use admin::*;
pub use authority::*;
pub use deposit::*;
pub use registration::*;
pub use stake::*;
pub use withdraw::*;

use common::bytes32_to_hex;
use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, SideBridgeConfig, SideTokenRecord, CONFIG, SIDE_BRIDGE, SIDE_TOKENS};

fn ensure_not_paused(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    Ok(config)
}

fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

/// Load the side bridge config and check that `sender` is one of its authorities.
fn ensure_authority(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<SideBridgeConfig, ContractError> {
    let side = SIDE_BRIDGE
        .may_load(storage)?
        .ok_or(ContractError::SideBridgeNotRegistered)?;
    if !side.authorities.contains(sender) {
        return Err(ContractError::NotAuthority);
    }
    Ok(side)
}

fn load_side_token(storage: &dyn Storage, id: &[u8; 32]) -> Result<SideTokenRecord, ContractError> {
    SIDE_TOKENS
        .may_load(storage, id)?
        .ok_or_else(|| ContractError::SideTokenNotRegistered {
            side_token_id: bytes32_to_hex(id),
        })
}
