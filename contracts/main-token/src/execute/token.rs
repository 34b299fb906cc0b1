//! Transfer and allowance handlers.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};
use common::ApprovalReceiveMsg;
use token_ledger::{handlers, ledger};

use super::{ensure_not_paused, ensure_unlocked};
use crate::error::ContractError;

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    ensure_unlocked(deps.storage, &[&info.sender, &recipient_addr])?;

    Ok(handlers::execute_transfer(deps, &info, recipient, amount)?)
}

pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    let owner_addr = deps.api.addr_validate(&owner)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    ensure_unlocked(deps.storage, &[&owner_addr, &recipient_addr])?;

    Ok(handlers::execute_transfer_from(
        deps, &info, owner, recipient, amount,
    )?)
}

pub fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    let contract_addr = deps.api.addr_validate(&contract)?;
    ensure_unlocked(deps.storage, &[&info.sender, &contract_addr])?;

    Ok(handlers::execute_send(deps, &info, contract, amount, msg)?)
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    ensure_unlocked(deps.storage, &[&info.sender])?;

    Ok(handlers::execute_burn(deps, &info, amount)?)
}

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    Ok(handlers::execute_approve(deps, &info, spender, amount)?)
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    Ok(handlers::execute_increase_allowance(
        deps, &info, spender, amount,
    )?)
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    Ok(handlers::execute_decrease_allowance(
        deps, &info, spender, amount,
    )?)
}

/// Approve `spender` and call it back in the same transaction.
///
/// The callback runs after this handler returns; if it fails, the approval
/// is rolled back with it.
pub fn execute_approve_and_call(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    data: Binary,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    let spender = deps.api.addr_validate(&spender)?;
    let event = ledger::approve(deps.storage, &info.sender, &spender, amount)?;

    let callback = ApprovalReceiveMsg {
        sender: info.sender.to_string(),
        amount,
        data,
    }
    .into_cosmos_msg(spender.to_string())?;

    Ok(Response::new()
        .add_message(callback)
        .add_event(event)
        .add_attribute("action", "approve_and_call")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}
