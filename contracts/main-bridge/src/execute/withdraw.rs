//! Quorum-released withdrawals for side-chain redeems.

use common::{bytes32_to_hex, parse_hash, Vote};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use super::{ensure_authority, load_side_token};
use crate::error::ContractError;
use crate::state::{WithdrawRecord, CONFIG, TOTAL_LOCKED, WITHDRAWS, WITHDRAW_SIGNATURES};

/// Authority signature on a withdrawal.
///
/// The first signer fixes the payload; later signers must submit the same
/// one. The signature that reaches the threshold releases
/// `amount_st` converted back to main-chain units. Signatures after that are
/// accepted and change nothing.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    redeem_id: Binary,
    side_token_id: Binary,
    owner: String,
    amount_st: Uint128,
    source_tx_hash: Binary,
) -> Result<Response, ContractError> {
    let side = ensure_authority(deps.storage, &info.sender)?;
    let id = parse_hash(&redeem_id)?;
    let id_hex = bytes32_to_hex(&id);
    let owner = deps.api.addr_validate(&owner)?;

    let mut withdraw = match WITHDRAWS.may_load(deps.storage, &id)? {
        Some(existing) => {
            if existing.side_token_id != side_token_id
                || existing.owner != owner
                || existing.amount_st != amount_st
                || existing.source_tx_hash != source_tx_hash
            {
                return Err(ContractError::WithdrawMismatch { redeem_id: id_hex });
            }
            existing
        }
        None => {
            let token_id = parse_hash(&side_token_id)?;
            let side_token = load_side_token(deps.storage, &token_id)?;
            let amount_mt = side_token.conversion.to_main_exact(amount_st)?;
            let record = WithdrawRecord {
                redeem_id: redeem_id.clone(),
                side_token_id,
                owner,
                amount_st,
                amount_mt,
                source_tx_hash,
                withdrawn: false,
            };
            WITHDRAWS.save(deps.storage, &id, &record)?;
            record
        }
    };

    let vote = WITHDRAW_SIGNATURES.record(
        deps.storage,
        &id,
        &info.sender,
        side.authorities.required_signatures,
    )?;

    let mut response = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("redeem_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        let locked = TOTAL_LOCKED.may_load(deps.storage)?.unwrap_or_default();
        if locked < withdraw.amount_mt {
            return Err(ContractError::InsufficientLocked {
                locked,
                required: withdraw.amount_mt,
            });
        }
        TOTAL_LOCKED.save(deps.storage, &(locked - withdraw.amount_mt))?;

        withdraw.withdrawn = true;
        WITHDRAWS.save(deps.storage, &id, &withdraw)?;

        let config = CONFIG.load(deps.storage)?;
        let release = WasmMsg::Execute {
            contract_addr: config.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: withdraw.owner.to_string(),
                amount: withdraw.amount_mt,
            })?,
            funds: vec![],
        };

        response = response.add_message(release).add_event(
            Event::new("main_token_withdrawed")
                .add_attribute("redeem_id", &id_hex)
                .add_attribute("owner", withdraw.owner.as_str())
                .add_attribute("amount_st", withdraw.amount_st)
                .add_attribute("amount_mt", withdraw.amount_mt),
        );
    }

    Ok(response)
}
