//! Two-phase authority substitution.

use common::{bytes32_to_hex, hash, parse_hash, AuthorityError, Vote};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use super::ensure_authority;
use crate::error::ContractError;
use crate::state::{
    ChangeRequest, CHANGE_NONCE, CHANGE_REQUESTS, CHANGE_SIGNATURES, CONFIG, SIDE_BRIDGE,
};

/// File a request to replace `old_authority` with `new_authority`. Open to anyone.
pub fn execute_change_authority_request(
    deps: DepsMut,
    info: MessageInfo,
    old_authority: String,
    new_authority: String,
) -> Result<Response, ContractError> {
    let side = SIDE_BRIDGE
        .may_load(deps.storage)?
        .ok_or(ContractError::SideBridgeNotRegistered)?;
    let old_authority = deps.api.addr_validate(&old_authority)?;
    let new_authority = deps.api.addr_validate(&new_authority)?;
    if !side.authorities.contains(&old_authority) {
        return Err(AuthorityError::NotAuthority {
            address: old_authority.to_string(),
        }
        .into());
    }
    if side.authorities.contains(&new_authority) {
        return Err(AuthorityError::AlreadyAuthority {
            address: new_authority.to_string(),
        }
        .into());
    }

    let config = CONFIG.load(deps.storage)?;
    let nonce = CHANGE_NONCE.may_load(deps.storage)?.unwrap_or_default();
    CHANGE_NONCE.save(deps.storage, &(nonce + 1))?;

    let change_id = hash::change_id(
        config.main_chain_id,
        old_authority.as_str(),
        new_authority.as_str(),
        nonce,
    );
    CHANGE_REQUESTS.save(
        deps.storage,
        &change_id,
        &ChangeRequest {
            change_id: Binary::from(change_id.to_vec()),
            old_authority: old_authority.clone(),
            new_authority: new_authority.clone(),
            nonce,
            executed: false,
        },
    )?;

    let id_hex = bytes32_to_hex(&change_id);
    Ok(Response::new()
        .add_event(
            Event::new("change_authority_request")
                .add_attribute("change_id", &id_hex)
                .add_attribute("old_authority", old_authority.as_str())
                .add_attribute("new_authority", new_authority.as_str())
                .add_attribute("requested_by", info.sender.as_str()),
        )
        .add_attribute("action", "change_authority_request")
        .add_attribute("change_id", id_hex)
        .add_attribute("old_authority", old_authority)
        .add_attribute("new_authority", new_authority))
}

/// Authority vote on a filed change request.
///
/// Only the remaining authorities vote; the substitution is applied by the
/// vote that reaches the threshold. The side bridge applies the same change
/// on its own quorum, so the two sets may differ in between.
pub fn execute_change_authority(
    deps: DepsMut,
    info: MessageInfo,
    change_id: Binary,
    old_authority: String,
    new_authority: String,
) -> Result<Response, ContractError> {
    let mut side = ensure_authority(deps.storage, &info.sender)?;
    let id = parse_hash(&change_id)?;
    let id_hex = bytes32_to_hex(&id);

    let mut request = CHANGE_REQUESTS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| ContractError::ChangeRequestNotFound {
            change_id: id_hex.clone(),
        })?;
    if request.old_authority.as_str() != old_authority
        || request.new_authority.as_str() != new_authority
    {
        return Err(ContractError::ChangeRequestMismatch { change_id: id_hex });
    }
    if info.sender == request.old_authority {
        return Err(ContractError::ReplacedAuthorityVote);
    }

    let vote = CHANGE_SIGNATURES.record(
        deps.storage,
        &id,
        &info.sender,
        side.authorities.required_signatures,
    )?;

    let mut response = Response::new()
        .add_attribute("action", "change_authority")
        .add_attribute("change_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        side.authorities
            .replace(&request.old_authority, request.new_authority.clone())?;
        SIDE_BRIDGE.save(deps.storage, &side)?;
        request.executed = true;
        CHANGE_REQUESTS.save(deps.storage, &id, &request)?;

        response = response.add_event(
            Event::new("authority_changed")
                .add_attribute("change_id", &id_hex)
                .add_attribute("old_authority", request.old_authority.as_str())
                .add_attribute("new_authority", request.new_authority.as_str()),
        );
    }

    Ok(response)
}
