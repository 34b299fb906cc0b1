//! Owner operations.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use token_ledger::state::TOKEN_INFO;
use token_ledger::{ledger, BalancePolicy};

use super::{ensure_not_paused, ensure_owner, ensure_unlocked};
use crate::error::ContractError;
use crate::state::{CONFIG, LINEAR_MINT, LOCKED};

// ============================================================================
// Supply
// ============================================================================

/// Mint `amount` to the owner, bounded by the max supply.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info)?;
    ensure_not_paused(deps.storage)?;
    if LINEAR_MINT.exists(deps.storage) {
        return Err(ContractError::MintDisabled);
    }

    let events = ledger::mint(deps.storage, &config.owner, amount)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "mint")
        .add_attribute("recipient", config.owner)
        .add_attribute("amount", amount))
}

/// Burn from `owner`'s balance using the allowance it granted the token owner.
pub fn execute_burn_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    ensure_not_paused(deps.storage)?;
    let holder = deps.api.addr_validate(&owner)?;
    ensure_unlocked(deps.storage, &[&holder])?;

    ledger::spend_allowance(deps.storage, &holder, &info.sender, amount)?;
    let events = ledger::burn(deps.storage, &holder, amount)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "burn_from")
        .add_attribute("from", holder)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

/// Claw back `amount` from `holder` to the owner.
///
/// Account locks do not apply here; a locked holder can still be recovered from.
pub fn execute_recover(
    deps: DepsMut,
    info: MessageInfo,
    holder: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info)?;
    ensure_not_paused(deps.storage)?;
    let holder = deps.api.addr_validate(&holder)?;

    let events = ledger::recover(deps.storage, &holder, &config.owner, amount)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "recover")
        .add_attribute("from", holder)
        .add_attribute("to", config.owner)
        .add_attribute("amount", amount))
}

// ============================================================================
// Pause
// ============================================================================

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;
    if config.paused {
        return Err(ContractError::TokenPaused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;
    if !config.paused {
        return Err(ContractError::TokenNotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

// ============================================================================
// Account Locks
// ============================================================================

pub fn execute_lock_account(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    if TOKEN_INFO.load(deps.storage)?.policy == BalancePolicy::AllowNegative {
        return Err(ContractError::LockUnsupported);
    }
    let account = deps.api.addr_validate(&account)?;
    if LOCKED.may_load(deps.storage, &account)?.unwrap_or(false) {
        return Err(ContractError::AccountAlreadyLocked {
            address: account.to_string(),
        });
    }

    LOCKED.save(deps.storage, &account, &true)?;

    Ok(Response::new()
        .add_attribute("action", "lock_account")
        .add_attribute("account", account))
}

pub fn execute_unlock_account(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    let account = deps.api.addr_validate(&account)?;
    if !LOCKED.may_load(deps.storage, &account)?.unwrap_or(false) {
        return Err(ContractError::AccountNotLocked {
            address: account.to_string(),
        });
    }

    LOCKED.remove(deps.storage, &account);

    Ok(Response::new()
        .add_attribute("action", "unlock_account")
        .add_attribute("account", account))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;
    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", config.owner))
}
