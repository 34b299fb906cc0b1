//! Staking ledger backed by main tokens held in the bridge.

use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use super::ensure_not_paused;
use crate::error::ContractError;
use crate::state::{CONFIG, STAKES};

pub fn execute_stake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_not_paused(deps.storage)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "stake amount must be greater than zero".to_string(),
        });
    }

    let staked = STAKES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        + amount;
    STAKES.save(deps.storage, &info.sender, &staked)?;

    let pull = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(pull)
        .add_event(
            Event::new("staked")
                .add_attribute("staker", info.sender.as_str())
                .add_attribute("amount", amount)
                .add_attribute("staked", staked),
        )
        .add_attribute("action", "stake")
        .add_attribute("staker", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_unstake(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "unstake amount must be greater than zero".to_string(),
        });
    }
    let staked = STAKES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if staked < amount {
        return Err(ContractError::InsufficientStake {
            staked,
            requested: amount,
        });
    }

    let remaining = staked - amount;
    if remaining.is_zero() {
        STAKES.remove(deps.storage, &info.sender);
    } else {
        STAKES.save(deps.storage, &info.sender, &remaining)?;
    }

    let config = CONFIG.load(deps.storage)?;
    let payout = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout)
        .add_event(
            Event::new("unstaked")
                .add_attribute("staker", info.sender.as_str())
                .add_attribute("amount", amount)
                .add_attribute("staked", remaining),
        )
        .add_attribute("action", "unstake")
        .add_attribute("staker", info.sender)
        .add_attribute("amount", amount))
}
