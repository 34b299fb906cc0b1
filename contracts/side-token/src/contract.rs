//! Side Token Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use token_ledger::{handlers, ledger, BalancePolicy, TokenInfo};

use crate::error::ContractError;
use crate::execute::{
    execute_mint, execute_redeem, execute_stake, execute_transfer_ownership,
    execute_transfer_with_fee, execute_unstake, execute_vest,
};
use crate::msg::{BridgeResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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
        side_bridge: deps.api.addr_validate(&msg.side_bridge)?,
    };
    CONFIG.save(deps.storage, &config)?;

    ledger::initialize(
        deps.storage,
        TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            max_supply: None,
            policy: BalancePolicy::Strict,
        },
        &config.owner,
        Uint128::zero(),
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("side_bridge", config.side_bridge)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(handlers::execute_transfer(deps, &info, recipient, amount)?)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(handlers::execute_transfer_from(
            deps, &info, owner, recipient, amount,
        )?),
        ExecuteMsg::TransferWithFee {
            recipient,
            amount,
            fee_collector,
            fee,
        } => execute_transfer_with_fee(deps, info, recipient, amount, fee_collector, fee),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(handlers::execute_send(deps, &info, contract, amount, msg)?),
        ExecuteMsg::Approve { spender, amount } => {
            Ok(handlers::execute_approve(deps, &info, spender, amount)?)
        }
        ExecuteMsg::IncreaseAllowance { spender, amount } => Ok(
            handlers::execute_increase_allowance(deps, &info, spender, amount)?,
        ),
        ExecuteMsg::Burn { amount } => Ok(handlers::execute_burn(deps, &info, amount)?),

        // Bridge
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Redeem { amount } => execute_redeem(deps, info, amount),
        ExecuteMsg::Stake { amount } => execute_stake(deps, info, amount),
        ExecuteMsg::Unstake { amount } => execute_unstake(deps, info, amount),
        ExecuteMsg::Vest {
            amount,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        } => execute_vest(
            deps,
            info,
            amount,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        ),

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
        QueryMsg::TokenInfo {} => to_json_binary(&handlers::query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&handlers::query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&handlers::query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Bridge {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&BridgeResponse {
                side_bridge: config.side_bridge,
                owner: config.owner,
            })
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
