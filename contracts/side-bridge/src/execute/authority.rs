//! Authority substitution confirmed on this bridge.

use common::{bytes32_to_hex, parse_hash, AuthorityError, Vote};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use super::ensure_authority;
use crate::error::ContractError;
use crate::state::{ChangeRequest, AUTHORITIES, CHANGE_REQUESTS, CHANGE_SIGNATURES};

/// Authority vote on a change filed with the main bridge.
///
/// The request itself lives on the main chain, so the first vote here fixes
/// the substitution and later votes must repeat it. This set is updated on
/// its own quorum and may differ from the main bridge's in the meantime.
pub fn execute_change_authority(
    deps: DepsMut,
    info: MessageInfo,
    change_id: Binary,
    old_authority: String,
    new_authority: String,
) -> Result<Response, ContractError> {
    let mut authorities = ensure_authority(deps.storage, &info.sender)?;
    let id = parse_hash(&change_id)?;
    let id_hex = bytes32_to_hex(&id);
    let old_authority = deps.api.addr_validate(&old_authority)?;
    let new_authority = deps.api.addr_validate(&new_authority)?;

    let mut request = match CHANGE_REQUESTS.may_load(deps.storage, &id)? {
        Some(existing)
            if existing.old_authority != old_authority
                || existing.new_authority != new_authority =>
        {
            return Err(ContractError::ChangeRequestMismatch { change_id: id_hex });
        }
        Some(existing) => existing,
        None => {
            if !authorities.contains(&old_authority) {
                return Err(AuthorityError::NotAuthority {
                    address: old_authority.to_string(),
                }
                .into());
            }
            if authorities.contains(&new_authority) {
                return Err(AuthorityError::AlreadyAuthority {
                    address: new_authority.to_string(),
                }
                .into());
            }
            ChangeRequest {
                change_id: Binary::from(id.to_vec()),
                old_authority,
                new_authority,
                executed: false,
            }
        }
    };
    if info.sender == request.old_authority {
        return Err(ContractError::ReplacedAuthorityVote);
    }

    let vote = CHANGE_SIGNATURES.record(
        deps.storage,
        &id,
        &info.sender,
        authorities.required_signatures,
    )?;

    let mut response = Response::new()
        .add_attribute("action", "change_authority")
        .add_attribute("change_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        authorities.replace(&request.old_authority, request.new_authority.clone())?;
        AUTHORITIES.save(deps.storage, &authorities)?;
        request.executed = true;

        response = response.add_event(
            Event::new("authority_changed")
                .add_attribute("change_id", &id_hex)
                .add_attribute("old_authority", request.old_authority.as_str())
                .add_attribute("new_authority", request.new_authority.as_str()),
        );
    }
    CHANGE_REQUESTS.save(deps.storage, &id, &request)?;

    Ok(response)
}
