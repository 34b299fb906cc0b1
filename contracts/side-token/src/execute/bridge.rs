//! Bridge minting and the hooks forwarded to the side bridge.

use common::SideTokenHookMsg;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use token_ledger::ledger;

use crate::error::ContractError;
use crate::state::CONFIG;

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.side_bridge {
        return Err(ContractError::NotBridge);
    }
    let recipient = deps.api.addr_validate(&recipient)?;
    let events = ledger::mint(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "mint")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

/// Move the caller's tokens to the bridge, then deliver `hook` to it.
fn deposit_with_hook(
    deps: DepsMut,
    info: &MessageInfo,
    amount: Uint128,
    hook: SideTokenHookMsg,
    action: &str,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let event = ledger::transfer(deps.storage, &info.sender, &config.side_bridge, amount)?;

    Ok(Response::new()
        .add_message(hook.into_cosmos_msg(config.side_bridge.to_string())?)
        .add_event(event)
        .add_attribute("action", action)
        .add_attribute("from", &info.sender)
        .add_attribute("bridge", config.side_bridge)
        .add_attribute("amount", amount))
}

pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let hook = SideTokenHookMsg::OnRedeem {
        owner: info.sender.to_string(),
        amount,
    };
    deposit_with_hook(deps, &info, amount, hook, "redeem")
}

pub fn execute_stake(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let hook = SideTokenHookMsg::OnStake {
        staker: info.sender.to_string(),
        amount,
    };
    deposit_with_hook(deps, &info, amount, hook, "stake")
}

pub fn execute_vest(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    cliff_in_days: u64,
    duration_in_days: u64,
    interval_in_days: u64,
) -> Result<Response, ContractError> {
    let hook = SideTokenHookMsg::OnVest {
        owner: info.sender.to_string(),
        amount,
        cliff_in_days,
        duration_in_days,
        interval_in_days,
    };
    deposit_with_hook(deps, &info, amount, hook, "vest")
}

/// Tokens come back through a bridge-initiated transfer.
pub fn execute_unstake(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let hook = SideTokenHookMsg::OnUnstake {
        staker: info.sender.to_string(),
        amount,
    };

    Ok(Response::new()
        .add_message(hook.into_cosmos_msg(config.side_bridge.to_string())?)
        .add_attribute("action", "unstake")
        .add_attribute("staker", info.sender)
        .add_attribute("amount", amount))
}
