//! Execute handlers for the side bridge contract.

mod admin;
mod authority;
mod deposit;
mod hooks;
mod redeem;
mod registration;

pub use admin::*;
pub use authority::*;
pub use deposit::*;
pub use hooks::*;
pub use redeem::*;
pub use registration::*;

use common::{bytes32_to_hex, AuthoritySet};
use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, SideTokenRecord, AUTHORITIES, CONFIG, SIDE_TOKENS};

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

fn ensure_authority(storage: &dyn Storage, sender: &Addr) -> Result<AuthoritySet, ContractError> {
    let authorities = AUTHORITIES.load(storage)?;
    if !authorities.contains(sender) {
        return Err(ContractError::NotAuthority);
    }
    Ok(authorities)
}

fn load_side_token(storage: &dyn Storage, id: &[u8; 32]) -> Result<SideTokenRecord, ContractError> {
    SIDE_TOKENS
        .may_load(storage, id)?
        .ok_or_else(|| ContractError::SideTokenNotRegistered {
            side_token_id: bytes32_to_hex(id),
        })
}
