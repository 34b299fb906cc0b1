//! Main Bridge Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_change_authority, execute_change_authority_request, execute_confirm_deposit,
    execute_deposit, execute_owner_deposit, execute_pause_bridge, execute_receive_approval,
    execute_register_side_bridge, execute_register_side_token, execute_resume_bridge,
    execute_stake, execute_transfer_ownership, execute_unstake, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_authorities, query_change_request, query_config, query_deposit,
    query_hash_side_token_id, query_is_authority, query_side_token, query_staked_amount,
    query_withdraw,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOTAL_LOCKED};

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

    let config = Config {
        owner: info.sender,
        admin: deps.api.addr_validate(&msg.admin)?,
        main_chain_id: msg.main_chain_id,
        token: deps.api.addr_validate(&msg.token)?,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_LOCKED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("admin", config.admin)
        .add_attribute("token", config.token)
        .add_attribute("main_chain_id", config.main_chain_id.to_string()))
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
        ExecuteMsg::RegisterSideBridge {
            side_bridge,
            required_signatures,
            authorities,
        } => execute_register_side_bridge(
            deps,
            info,
            side_bridge,
            required_signatures,
            authorities,
        ),
        ExecuteMsg::RegisterSideToken {
            side_chain_id,
            name,
            symbol,
            conversion_rate,
            conversion_rate_decimals,
            side_token_id,
        } => execute_register_side_token(
            deps,
            info,
            side_chain_id,
            name,
            symbol,
            conversion_rate,
            conversion_rate_decimals,
            side_token_id,
        ),

        // Deposits
        ExecuteMsg::Deposit {
            side_token_id,
            amount,
        } => execute_deposit(deps, env, info, side_token_id, amount),
        ExecuteMsg::ReceiveApproval(approval) => {
            execute_receive_approval(deps, env, info, approval)
        }
        ExecuteMsg::OwnerDeposit {
            beneficiary,
            side_token_id,
            amount,
        } => execute_owner_deposit(deps, env, info, beneficiary, side_token_id, amount),
        ExecuteMsg::ConfirmDeposit { deposit_id } => {
            execute_confirm_deposit(deps, info, deposit_id)
        }

        // Withdrawals
        ExecuteMsg::Withdraw {
            redeem_id,
            side_token_id,
            owner,
            amount_st,
            source_tx_hash,
        } => execute_withdraw(
            deps,
            info,
            redeem_id,
            side_token_id,
            owner,
            amount_st,
            source_tx_hash,
        ),

        // Pause
        ExecuteMsg::PauseBridge {} => execute_pause_bridge(deps, info),
        ExecuteMsg::ResumeBridge {} => execute_resume_bridge(deps, info),

        // Staking
        ExecuteMsg::Stake { amount } => execute_stake(deps, env, info, amount),
        ExecuteMsg::Unstake { amount } => execute_unstake(deps, info, amount),

        // Authority changes
        ExecuteMsg::ChangeAuthorityRequest {
            old_authority,
            new_authority,
        } => execute_change_authority_request(deps, info, old_authority, new_authority),
        ExecuteMsg::ChangeAuthority {
            change_id,
            old_authority,
            new_authority,
        } => execute_change_authority(deps, info, change_id, old_authority, new_authority),

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
        QueryMsg::Withdraw { redeem_id } => to_json_binary(&query_withdraw(deps, redeem_id)?),
        QueryMsg::StakedAmount { staker } => {
            to_json_binary(&query_staked_amount(deps, staker)?)
        }
        QueryMsg::Authorities {} => to_json_binary(&query_authorities(deps)?),
        QueryMsg::IsAuthority { address } => to_json_binary(&query_is_authority(deps, address)?),
        QueryMsg::ChangeRequest { change_id } => {
            to_json_binary(&query_change_request(deps, change_id)?)
        }
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
