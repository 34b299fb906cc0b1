//! Quorum-minted deposits replayed from the main chain.

use common::{bytes32_to_hex, hash, parse_hash, Vote};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use super::{ensure_authority, load_side_token};
use crate::error::ContractError;
use crate::state::{DepositRecord, CONFIG, DEPOSITS, DEPOSIT_SIGNATURES};

/// Authority signature on a main-chain deposit.
///
/// The deposit id and side amount are recomputed from the payload and the
/// registered conversion rate, so a signer cannot mint more than was locked.
/// The first signer fixes the payload; the vote reaching the threshold
/// mints `amount_st` to the beneficiary.
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    side_token_id: Binary,
    deposit_id: Binary,
    deposit_count: u64,
    beneficiary: String,
    amount_mt: Uint128,
    amount_st: Uint128,
    source_tx_hash: Binary,
) -> Result<Response, ContractError> {
    let authorities = ensure_authority(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let token_id = parse_hash(&side_token_id)?;
    let side_token = load_side_token(deps.storage, &token_id)?;
    if !side_token.acknowledged {
        return Err(ContractError::SideTokenNotAcknowledged {
            side_token_id: bytes32_to_hex(&token_id),
        });
    }

    let expected_st = side_token.conversion.to_side(amount_mt)?;
    if expected_st != amount_st {
        return Err(ContractError::AmountMismatch {
            expected: expected_st,
            supplied: amount_st,
        });
    }

    let supplied = parse_hash(&deposit_id)?;
    let computed = hash::deposit_id(
        config.main_chain_id,
        &token_id,
        deposit_count,
        &beneficiary,
        amount_mt,
        amount_st,
    );
    if computed != supplied {
        return Err(ContractError::DepositIdMismatch {
            computed: bytes32_to_hex(&computed),
            supplied: bytes32_to_hex(&supplied),
        });
    }
    let id_hex = bytes32_to_hex(&computed);

    let mut deposit = match DEPOSITS.may_load(deps.storage, &computed)? {
        // every other field is covered by the id
        Some(existing) if existing.source_tx_hash != source_tx_hash => {
            return Err(ContractError::DepositMismatch { deposit_id: id_hex });
        }
        Some(existing) => existing,
        None => {
            let record = DepositRecord {
                deposit_id: Binary::from(computed.to_vec()),
                side_token_id,
                deposit_count,
                beneficiary: deps.api.addr_validate(&beneficiary)?,
                amount_mt,
                amount_st,
                source_tx_hash,
                minted: false,
            };
            DEPOSITS.save(deps.storage, &computed, &record)?;
            record
        }
    };

    let vote = DEPOSIT_SIGNATURES.record(
        deps.storage,
        &computed,
        &info.sender,
        authorities.required_signatures,
    )?;

    let mut response = Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("deposit_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    if let Vote::Reached(_) = vote {
        deposit.minted = true;
        DEPOSITS.save(deps.storage, &computed, &deposit)?;

        let mint = WasmMsg::Execute {
            contract_addr: side_token.side_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                recipient: deposit.beneficiary.to_string(),
                amount: deposit.amount_st,
            })?,
            funds: vec![],
        };

        response = response.add_message(mint).add_event(
            Event::new("side_token_minted")
                .add_attribute("deposit_id", &id_hex)
                .add_attribute("side_token_id", bytes32_to_hex(&token_id))
                .add_attribute("beneficiary", deposit.beneficiary.as_str())
                .add_attribute("amount_mt", deposit.amount_mt)
                .add_attribute("amount_st", deposit.amount_st),
        );
    }

    Ok(response)
}
