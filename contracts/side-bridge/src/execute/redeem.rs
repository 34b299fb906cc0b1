//! Redeem confirmation: burning the held side tokens after the main-chain
//! withdrawal.

use common::{bytes32_to_hex, parse_hash, Vote};
use cosmwasm_std::{to_json_binary, Binary, DepsMut, Event, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;

use super::{ensure_authority, load_side_token};
use crate::error::ContractError;
use crate::state::{RedeemStatus, REDEEMS, REDEEM_CONFIRMATIONS};

pub fn execute_confirm_redeem(
    deps: DepsMut,
    info: MessageInfo,
    redeem_id: Binary,
) -> Result<Response, ContractError> {
    let authorities = ensure_authority(deps.storage, &info.sender)?;
    let id = parse_hash(&redeem_id)?;
    let id_hex = bytes32_to_hex(&id);
    let mut redeem = REDEEMS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| ContractError::RedeemNotFound {
            redeem_id: id_hex.clone(),
        })?;

    let vote = REDEEM_CONFIRMATIONS.record(
        deps.storage,
        &id,
        &info.sender,
        authorities.required_signatures,
    )?;

    let mut response = Response::new()
        .add_attribute("action", "confirm_redeem")
        .add_attribute("redeem_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        let token_id = parse_hash(&redeem.side_token_id)?;
        let side_token = load_side_token(deps.storage, &token_id)?;

        redeem.status = RedeemStatus::Confirmed;
        REDEEMS.save(deps.storage, &id, &redeem)?;

        let burn = WasmMsg::Execute {
            contract_addr: side_token.side_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Burn {
                amount: redeem.amount_st,
            })?,
            funds: vec![],
        };

        response = response.add_message(burn).add_event(
            Event::new("side_token_redeem_confirmed")
                .add_attribute("redeem_id", &id_hex)
                .add_attribute("owner", redeem.owner.as_str())
                .add_attribute("amount_st", redeem.amount_st),
        );
    }

    Ok(response)
}
