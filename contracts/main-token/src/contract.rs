//! Main Token Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use token_ledger::{ledger, BalancePolicy, TokenInfo};

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_approve_and_call, execute_burn, execute_burn_from,
    execute_decrease_allowance, execute_increase_allowance, execute_linear_mint,
    execute_lock_account, execute_mint, execute_pause, execute_recover,
    execute_register_linear_mint, execute_send, execute_transfer, execute_transfer_from,
    execute_transfer_ownership, execute_unlock_account, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_balance, query_calculate_mint_amount, query_is_locked,
    query_linear_mint_schedule, query_status, query_token_info,
};
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

    let policy = msg.balance_policy.unwrap_or_default();
    if policy == BalancePolicy::AllowNegative && msg.max_supply.is_some() {
        return Err(ContractError::MaxSupplyUnsupported);
    }

    let config = Config {
        owner: info.sender.clone(),
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    let events = ledger::initialize(
        deps.storage,
        TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            max_supply: msg.max_supply,
            policy,
        },
        &config.owner,
        msg.initial_supply,
    )?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("initial_supply", msg.initial_supply))
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
        // Transfers & allowances
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, info, contract, amount, msg),
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::ApproveAndCall {
            spender,
            amount,
            data,
        } => execute_approve_and_call(deps, info, spender, amount, data),
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),

        // Owner operations
        ExecuteMsg::Mint { amount } => execute_mint(deps, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),
        ExecuteMsg::Recover { holder, amount } => execute_recover(deps, info, holder, amount),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::LockAccount { account } => execute_lock_account(deps, info, account),
        ExecuteMsg::UnlockAccount { account } => execute_unlock_account(deps, info, account),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }

        // Linear mint
        ExecuteMsg::RegisterLinearMint {
            minting_supply,
            amount_per_period,
            period_length_in_days,
        } => execute_register_linear_mint(
            deps,
            env,
            info,
            minting_supply,
            amount_per_period,
            period_length_in_days,
        ),
        ExecuteMsg::LinearMint {} => execute_linear_mint(deps, env),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::IsLocked { address } => to_json_binary(&query_is_locked(deps, address)?),
        QueryMsg::LinearMintSchedule {} => to_json_binary(&query_linear_mint_schedule(deps)?),
        QueryMsg::CalculateMintAmount { at_timestamp } => {
            to_json_binary(&query_calculate_mint_amount(deps, at_timestamp)?)
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
