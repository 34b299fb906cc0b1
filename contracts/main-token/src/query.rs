//! Query handlers for the main token contract.

use cosmwasm_std::{Deps, StdError, StdResult};
use cw20::TokenInfoResponse;
use token_ledger::handlers;
use token_ledger::msg::{AllowanceResponse, BalanceResponse};
use token_ledger::state::TOKEN_INFO;

use crate::msg::{IsLockedResponse, MintAmountResponse, StatusResponse};
use crate::schedule::LinearMintSchedule;
use crate::state::{CONFIG, LINEAR_MINT, LOCKED};

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    handlers::query_token_info(deps)
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    handlers::query_balance(deps, address)
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    handlers::query_allowance(deps, owner, spender)
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token = TOKEN_INFO.load(deps.storage)?;
    Ok(StatusResponse {
        owner: config.owner,
        paused: config.paused,
        max_supply: token.max_supply,
        balance_policy: token.policy,
        linear_mint_registered: LINEAR_MINT.exists(deps.storage),
    })
}

pub fn query_is_locked(deps: Deps, address: String) -> StdResult<IsLockedResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsLockedResponse {
        locked: LOCKED.may_load(deps.storage, &address)?.unwrap_or(false),
    })
}

pub fn query_linear_mint_schedule(deps: Deps) -> StdResult<Option<LinearMintSchedule>> {
    LINEAR_MINT.may_load(deps.storage)
}

pub fn query_calculate_mint_amount(deps: Deps, at_timestamp: u64) -> StdResult<MintAmountResponse> {
    let schedule = LINEAR_MINT
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("Linear mint not registered"))?;
    Ok(MintAmountResponse {
        amount: schedule.mint_amount_at(at_timestamp),
    })
}
