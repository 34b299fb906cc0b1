//! Pause, resume and ownership.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use super::ensure_owner;
use crate::error::ContractError;
use crate::state::CONFIG;

pub fn execute_pause_bridge(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner && info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(Event::new("bridge_paused").add_attribute("by", info.sender.as_str()))
        .add_attribute("action", "pause_bridge")
        .add_attribute("by", info.sender))
}

pub fn execute_resume_bridge(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner && info.sender != config.admin {
        return Err(ContractError::UnauthorizedAdmin);
    }
    if !config.paused {
        return Err(ContractError::BridgeNotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(Event::new("bridge_resumed").add_attribute("by", info.sender.as_str()))
        .add_attribute("action", "resume_bridge")
        .add_attribute("by", info.sender))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", config.owner))
}
