//! Ready-made execute and query handlers over the ledger.
//!
//! Contracts run their own access checks first and then delegate here.

use cosmwasm_std::{Binary, CosmosMsg, Deps, DepsMut, MessageInfo, Response, StdResult, Uint128};
use cw20::{Cw20ReceiveMsg, TokenInfoResponse};

use crate::error::LedgerError;
use crate::ledger;
use crate::msg::{AllowanceResponse, BalanceResponse};
use crate::state::TOKEN_INFO;

// ============================================================================
// Execute
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    info: &MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let event = ledger::transfer(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "transfer")
        .add_attribute("from", &info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    info: &MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    ledger::spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    let event = ledger::transfer(deps.storage, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", &info.sender)
        .add_attribute("amount", amount))
}

/// Transfer to a contract and invoke its CW20 `Receive` hook.
pub fn execute_send(
    deps: DepsMut,
    info: &MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, LedgerError> {
    let contract = deps.api.addr_validate(&contract)?;
    let event = ledger::transfer(deps.storage, &info.sender, &contract, amount)?;

    let receive: CosmosMsg = Cw20ReceiveMsg {
        sender: info.sender.to_string(),
        amount,
        msg,
    }
    .into_cosmos_msg(contract.to_string())?;

    Ok(Response::new()
        .add_message(receive)
        .add_event(event)
        .add_attribute("action", "send")
        .add_attribute("from", &info.sender)
        .add_attribute("to", contract)
        .add_attribute("amount", amount))
}

pub fn execute_burn(
    deps: DepsMut,
    info: &MessageInfo,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let events = ledger::burn(deps.storage, &info.sender, amount)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "burn")
        .add_attribute("from", &info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_approve(
    deps: DepsMut,
    info: &MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let spender = deps.api.addr_validate(&spender)?;
    let event = ledger::approve(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "approve")
        .add_attribute("owner", &info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    info: &MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let spender = deps.api.addr_validate(&spender)?;
    let event = ledger::increase_allowance(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", &info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: &MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let spender = deps.api.addr_validate(&spender)?;
    let event = ledger::decrease_allowance(deps.storage, &info.sender, &spender, amount)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", &info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Query
// ============================================================================

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: ledger::balance_of(deps.storage, &address)?,
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    Ok(AllowanceResponse {
        allowance: ledger::allowance_of(deps.storage, &owner, &spender)?,
    })
}
