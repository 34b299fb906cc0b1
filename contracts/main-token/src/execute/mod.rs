//! Execute handlers for the main token contract.
//!
//! - `token` - transfers and allowances, gated by pause and account locks
//! - `admin` - owner minting, clawback, pause and lock management
//! - `linear_mint` - schedule registration and scheduled minting

mod admin;
mod linear_mint;
mod token;

pub use admin::*;
pub use linear_mint::*;
pub use token::*;

use cosmwasm_std::{Addr, MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, LOCKED};

fn ensure_not_paused(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.paused {
        return Err(ContractError::TokenPaused);
    }
    Ok(config)
}

fn ensure_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

fn ensure_unlocked(storage: &dyn Storage, accounts: &[&Addr]) -> Result<(), ContractError> {
    for account in accounts {
        if LOCKED.may_load(storage, account)?.unwrap_or(false) {
            return Err(ContractError::AccountLocked {
                address: account.to_string(),
            });
        }
    }
    Ok(())
}
