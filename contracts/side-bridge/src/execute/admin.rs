//! Ownership, operators and the quorum pause.

use common::{bytes32_to_hex, parse_hash, Quorum, Vote};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use super::{ensure_authority, ensure_owner};
use crate::error::ContractError;
use crate::state::{CONFIG, OPERATORS, PAUSE_VOTES, RESUME_VOTES};

pub fn execute_add_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.save(deps.storage, &operator, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_operator")
        .add_attribute("operator", operator))
}

pub fn execute_remove_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.remove(deps.storage, &operator);

    Ok(Response::new()
        .add_attribute("action", "remove_operator")
        .add_attribute("operator", operator))
}

pub fn execute_set_vesting_contract(
    deps: DepsMut,
    info: MessageInfo,
    vesting_contract: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    let vesting_contract = deps.api.addr_validate(&vesting_contract)?;
    config.vesting_contract = Some(vesting_contract.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_vesting_contract")
        .add_attribute("vesting_contract", vesting_contract))
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

/// Shared body of the pause and resume quorums. `pause` is the target state.
fn vote_pause_state(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: Binary,
    votes: &Quorum,
    pause: bool,
) -> Result<Response, ContractError> {
    let authorities = ensure_authority(deps.storage, &info.sender)?;
    let subject = parse_hash(&tx_hash)?;
    let mut config = CONFIG.load(deps.storage)?;

    // A vote on an already-finalized hash is a no-op even if the state moved on.
    if !votes.tally(deps.storage, &subject)?.finalized && config.paused == pause {
        return Err(if pause {
            ContractError::BridgePaused
        } else {
            ContractError::BridgeNotPaused
        });
    }

    let vote = votes.record(
        deps.storage,
        &subject,
        &info.sender,
        authorities.required_signatures,
    )?;

    let action = if pause { "pause_bridge" } else { "resume_bridge" };
    let mut response = Response::new()
        .add_attribute("action", action)
        .add_attribute("tx_hash", bytes32_to_hex(&subject))
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        config.paused = pause;
        CONFIG.save(deps.storage, &config)?;
        let event = if pause { "bridge_paused" } else { "bridge_resumed" };
        response = response
            .add_event(Event::new(event).add_attribute("tx_hash", bytes32_to_hex(&subject)));
    }

    Ok(response)
}

pub fn execute_pause_bridge(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: Binary,
) -> Result<Response, ContractError> {
    vote_pause_state(deps, info, tx_hash, &PAUSE_VOTES, true)
}

pub fn execute_resume_bridge(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: Binary,
) -> Result<Response, ContractError> {
    vote_pause_state(deps, info, tx_hash, &RESUME_VOTES, false)
}
