//! Transfers, including the fee-bearing variant.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, StdError, Uint128};
use token_ledger::ledger;

use crate::error::ContractError;
use crate::state::CONFIG;

/// Pay `amount` to `recipient` and `fee` to `fee_collector`.
///
/// The sender must hold `amount + fee` up front; a zero fee skips the
/// collector leg.
pub fn execute_transfer_with_fee(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    fee_collector: String,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let fee_collector = deps.api.addr_validate(&fee_collector)?;

    let required = amount.checked_add(fee).map_err(StdError::from)?;
    let balance = ledger::balance_of(deps.storage, &info.sender)?;
    let covered = u128::try_from(balance.i128())
        .map(|held| held >= required.u128())
        .unwrap_or(false);
    if !covered {
        return Err(ContractError::InsufficientFundsWithFee { balance, required });
    }

    let mut events = vec![ledger::transfer(
        deps.storage,
        &info.sender,
        &recipient,
        amount,
    )?];
    if !fee.is_zero() {
        events.push(ledger::transfer(
            deps.storage,
            &info.sender,
            &fee_collector,
            fee,
        )?);
    }

    let record = Event::new("transferred_with_fee")
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", recipient.as_str())
        .add_attribute("value", amount)
        .add_attribute("fee_collector", fee_collector.as_str())
        .add_attribute("fee", fee);

    Ok(Response::new()
        .add_events(events)
        .add_event(record)
        .add_attribute("action", "transfer_with_fee")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("fee", fee))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", config.owner))
}
