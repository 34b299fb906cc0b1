//! Side Bridge Contract - Entry Points

use common::AuthoritySet;
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_acknowledge_side_token, execute_add_operator, execute_change_authority,
    execute_confirm_redeem, execute_deposit, execute_pause_bridge, execute_register_side_token,
    execute_remove_operator, execute_resume_bridge, execute_set_vesting_contract,
    execute_token_hook, execute_transfer_ownership,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_authorities, query_config, query_deposit, query_hash_side_token_id, query_is_authority,
    query_operators, query_redeem, query_side_token, query_staked_amount, query_vest_count,
    query_vest_info,
};
use crate::state::{Config, AUTHORITIES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let authorities = msg
        .authorities
        .iter()
        .map(|a| deps.api.addr_validate(a))
        .collect::<StdResult<Vec<Addr>>>()?;
    let authorities = AuthoritySet::new(authorities, msg.required_signatures)?;
    AUTHORITIES.save(deps.storage, &authorities)?;

    if msg.main_bridge.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "main bridge cannot be empty".to_string(),
        });
    }
    let vesting_contract = msg
        .vesting_contract
        .map(|v| deps.api.addr_validate(&v))
        .transpose()?;

    let config = Config {
        owner: info.sender,
        main_chain_id: msg.main_chain_id,
        main_bridge: msg.main_bridge,
        side_chain_id: msg.side_chain_id,
        vesting_contract,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("main_bridge", config.main_bridge)
        .add_attribute("side_chain_id", config.side_chain_id.to_string())
        .add_attribute("authorities", authorities.len().to_string())
        .add_attribute(
            "required_signatures",
            authorities.required_signatures.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Registration
        ExecuteMsg::RegisterSideToken {
            side_token_id,
            side_token,
            conversion_rate,
            conversion_rate_decimals,
        } => execute_register_side_token(
            deps,
            info,
            side_token_id,
            side_token,
            conversion_rate,
            conversion_rate_decimals,
        ),
        ExecuteMsg::AcknowledgeSideToken { side_token_id } => {
            execute_acknowledge_side_token(deps, info, side_token_id)
        }
        ExecuteMsg::AddOperator { operator } => execute_add_operator(deps, info, operator),
        ExecuteMsg::RemoveOperator { operator } => execute_remove_operator(deps, info, operator),
        ExecuteMsg::SetVestingContract { vesting_contract } => {
            execute_set_vesting_contract(deps, info, vesting_contract)
        }

        // Authority quorums
        ExecuteMsg::Deposit {
            side_token_id,
            deposit_id,
            deposit_count,
            beneficiary,
            amount_mt,
            amount_st,
            source_tx_hash,
        } => execute_deposit(
            deps,
            info,
            side_token_id,
            deposit_id,
            deposit_count,
            beneficiary,
            amount_mt,
            amount_st,
            source_tx_hash,
        ),
        ExecuteMsg::ConfirmRedeem { redeem_id } => execute_confirm_redeem(deps, info, redeem_id),
        ExecuteMsg::PauseBridge { tx_hash } => execute_pause_bridge(deps, info, tx_hash),
        ExecuteMsg::ResumeBridge { tx_hash } => execute_resume_bridge(deps, info, tx_hash),
        ExecuteMsg::ChangeAuthority {
            change_id,
            old_authority,
            new_authority,
        } => execute_change_authority(deps, info, change_id, old_authority, new_authority),

        // Side token callbacks
        ExecuteMsg::TokenHook(hook) => execute_token_hook(deps, env, info, hook),

        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::SideToken { side_token_id } => {
            to_json_binary(&query_side_token(deps, side_token_id)?)
        }
        QueryMsg::HashSideTokenId {
            side_chain_id,
            name,
            symbol,
            conversion_rate,
            conversion_rate_decimals,
        } => to_json_binary(&query_hash_side_token_id(
            side_chain_id,
            name,
            symbol,
            conversion_rate,
            conversion_rate_decimals,
        )?),
        QueryMsg::Deposit { deposit_id } => to_json_binary(&query_deposit(deps, deposit_id)?),
        QueryMsg::Redeem { redeem_id } => to_json_binary(&query_redeem(deps, redeem_id)?),
        QueryMsg::StakedAmount {
            side_token_id,
            staker,
        } => to_json_binary(&query_staked_amount(deps, side_token_id, staker)?),
        QueryMsg::VestCount { owner } => to_json_binary(&query_vest_count(deps, owner)?),
        QueryMsg::VestInfo { owner, index } => {
            to_json_binary(&query_vest_info(deps, owner, index)?)
        }
        QueryMsg::Authorities {} => to_json_binary(&query_authorities(deps)?),
        QueryMsg::IsAuthority { address } => to_json_binary(&query_is_authority(deps, address)?),
        QueryMsg::Operators {} => to_json_binary(&query_operators(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
