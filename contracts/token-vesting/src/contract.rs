//! Token Vesting Contract - Entry Points

use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg};
use crate::query::{
    query_calculate_release_amount, query_grant, query_grant_count, query_grants_by_recipient,
};
use crate::schedule::VestingSchedule;
use crate::state::{
    Grant, CONTRACT_NAME, CONTRACT_VERSION, GRANTS, GRANTS_BY_RECIPIENT, GRANT_COUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    GRANT_COUNT.save(deps.storage, &0)?;

    Ok(Response::new().add_attribute("action", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, env, info, wrapper),
        ExecuteMsg::Release { grant_id } => execute_release(deps, env, grant_id),
    }
}

/// Create a grant from a CW20 `Send`. The sending token contract is the
/// grant's token and `wrapper.sender` its funder.
fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    match from_json(&wrapper.msg)? {
        ReceiveMsg::CreateGrant {
            recipient,
            start,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        } => {
            let funder = deps.api.addr_validate(&wrapper.sender)?;
            let recipient = deps.api.addr_validate(&recipient)?;
            let schedule = VestingSchedule::new(
                wrapper.amount,
                start.unwrap_or_else(|| env.block.time.seconds()),
                cliff_in_days,
                duration_in_days,
                interval_in_days,
            )?;

            let id = GRANT_COUNT.may_load(deps.storage)?.unwrap_or_default();
            GRANT_COUNT.save(deps.storage, &(id + 1))?;

            let grant = Grant {
                id,
                token: info.sender,
                funder,
                recipient,
                schedule,
                released: Uint128::zero(),
            };
            GRANTS.save(deps.storage, id, &grant)?;
            GRANTS_BY_RECIPIENT.save(deps.storage, (&grant.recipient, id), &())?;

            let event = Event::new("grant_created")
                .add_attribute("grant_id", id.to_string())
                .add_attribute("token", grant.token.as_str())
                .add_attribute("recipient", grant.recipient.as_str())
                .add_attribute("amount", grant.schedule.total_amount);

            Ok(Response::new()
                .add_event(event)
                .add_attribute("action", "create_grant")
                .add_attribute("grant_id", id.to_string())
                .add_attribute("funder", grant.funder)
                .add_attribute("recipient", grant.recipient)
                .add_attribute("amount", grant.schedule.total_amount)
                .add_attribute("start", grant.schedule.start.to_string()))
        }
    }
}

fn execute_release(deps: DepsMut, env: Env, grant_id: u64) -> Result<Response, ContractError> {
    let mut grant = GRANTS
        .may_load(deps.storage, grant_id)?
        .ok_or(ContractError::GrantNotFound { grant_id })?;

    let amount = grant
        .schedule
        .vested_at(env.block.time.seconds())
        .saturating_sub(grant.released);
    if amount.is_zero() {
        return Err(ContractError::NothingToRelease { grant_id });
    }

    grant.released += amount;
    GRANTS.save(deps.storage, grant_id, &grant)?;

    let payout = WasmMsg::Execute {
        contract_addr: grant.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: grant.recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let event = Event::new("released")
        .add_attribute("grant_id", grant_id.to_string())
        .add_attribute("recipient", grant.recipient.as_str())
        .add_attribute("released_amount", amount);

    Ok(Response::new()
        .add_message(payout)
        .add_event(event)
        .add_attribute("action", "release")
        .add_attribute("grant_id", grant_id.to_string())
        .add_attribute("recipient", grant.recipient)
        .add_attribute("amount", amount)
        .add_attribute("released", grant.released))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Grant { grant_id } => to_json_binary(&query_grant(deps, grant_id)?),
        QueryMsg::CalculateReleaseAmount {
            grant_id,
            at_timestamp,
        } => to_json_binary(&query_calculate_release_amount(
            deps,
            grant_id,
            at_timestamp,
        )?),
        QueryMsg::GrantsByRecipient {
            recipient,
            start_after,
            limit,
        } => to_json_binary(&query_grants_by_recipient(
            deps,
            recipient,
            start_after,
            limit,
        )?),
        QueryMsg::GrantCount {} => to_json_binary(&query_grant_count(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
